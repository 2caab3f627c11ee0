mod in_memory_resolver;
mod test_files;

pub use self::in_memory_resolver::InMemoryResolver;
