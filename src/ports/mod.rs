mod resource_resolver;

pub use resource_resolver::{ResourceResolver, ResourceStream};
