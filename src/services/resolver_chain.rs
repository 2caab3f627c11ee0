use std::io;

use crate::ports::{ResourceResolver, ResourceStream};

type BoxedResolver = Box<dyn ResourceResolver + Send + Sync>;

/// Ordered list of resolvers; the first one that knows an identifier wins.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<BoxedResolver>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver, consuming and returning the chain.
    pub fn with<R>(mut self, resolver: R) -> Self
    where
        R: ResourceResolver + Send + Sync + 'static,
    {
        self.push(resolver);
        self
    }

    pub fn push<R>(&mut self, resolver: R)
    where
        R: ResourceResolver + Send + Sync + 'static,
    {
        self.resolvers.push(Box::new(resolver));
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl std::fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverChain").field("resolvers", &self.resolvers.len()).finish()
    }
}

impl ResourceResolver for ResolverChain {
    fn open(&self, id: &str) -> io::Result<Option<ResourceStream>> {
        for resolver in &self.resolvers {
            if let Some(stream) = resolver.open(id)? {
                return Ok(Some(stream));
            }
        }
        Ok(None)
    }

    fn location(&self, id: &str) -> Option<String> {
        self.resolvers.iter().find_map(|resolver| resolver.location(id))
    }
}
