mod embedded_resolver;
mod filesystem_resolver;
mod resolver_chain;

pub use embedded_resolver::EmbeddedResolver;
pub use filesystem_resolver::FilesystemResolver;
pub use resolver_chain::ResolverChain;
