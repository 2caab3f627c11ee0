//! Filesystem-backed configuration loading.
//!
//! Pure schema parsing lives in `domain::loader_config`.

mod build_resolver;
mod load_config;

pub use build_resolver::build_resolver;
pub use load_config::load_config;
