//! Resource resolution port.
//!
//! A resolver maps resource identifiers onto bytes and locations. The search
//! order across roots or bundles is entirely the resolver's business; the
//! accessor functions in `app::resources` never second-guess it.

use std::io::{self, Read};

/// An open, readable resource stream owned by the caller.
pub type ResourceStream = Box<dyn Read + Send>;

/// Port for resolving resource identifiers.
pub trait ResourceResolver {
    /// Open the resource as a byte stream positioned at its start.
    ///
    /// `Ok(None)` means the identifier does not resolve. `Err` is reserved for
    /// lower-level failures while opening something that does exist.
    fn open(&self, id: &str) -> io::Result<Option<ResourceStream>>;

    /// Raw location of the resource, without reading its content.
    ///
    /// The returned string is expected to be an absolute URI, but callers
    /// validate it; `None` means the identifier does not resolve.
    fn location(&self, id: &str) -> Option<String>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for &R {
    fn open(&self, id: &str) -> io::Result<Option<ResourceStream>> {
        (**self).open(id)
    }

    fn location(&self, id: &str) -> Option<String> {
        (**self).location(id)
    }
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for Box<R> {
    fn open(&self, id: &str) -> io::Result<Option<ResourceStream>> {
        (**self).open(id)
    }

    fn location(&self, id: &str) -> Option<String> {
        (**self).location(id)
    }
}
