//! Loader configuration loading from disk.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::{AppError, LoaderConfig, parse_config_content};

/// Load and parse a loader configuration file.
///
/// Relative roots are resolved against the directory containing the file.
pub fn load_config(path: &Path) -> Result<LoaderConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!(
            "Loader config not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let config = parse_config_content(&content)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let config = config.rebased(base);

    debug!("Loaded {} resource root(s) from {}", config.roots.len(), path.display());
    Ok(config)
}
