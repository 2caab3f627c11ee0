//! reskit: typed access to bundled resources through a pluggable resolver.
//!
//! The accessor functions take the resolver as an argument and never cache:
//!
//! ```no_run
//! use reskit::{FilesystemResolver, read_as_text};
//!
//! let resolver = FilesystemResolver::new("assets".into());
//! let text = read_as_text(&resolver, "textData.txt")?;
//! # Ok::<(), reskit::AppError>(())
//! ```

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::resources::{
    list_child_names, open_stream, read_as_key_value_map, read_as_text, resolve_location,
};
pub use domain::{AppError, LoaderConfig, PropertyMap};
pub use ports::{ResourceResolver, ResourceStream};
pub use services::{EmbeddedResolver, FilesystemResolver, ResolverChain};
