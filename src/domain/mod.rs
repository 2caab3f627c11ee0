pub mod error;
pub mod listing;
pub mod loader_config;
pub mod resource_id;

pub use error::AppError;
pub use loader_config::{LoaderConfig, parse_config_content};

use std::collections::BTreeMap;

/// Key-value view of a property resource, ordered by key.
pub type PropertyMap = BTreeMap<String, String>;
