pub mod ports;

pub use ports::InMemoryResolver;
