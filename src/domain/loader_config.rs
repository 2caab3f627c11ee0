//! Loader configuration model.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Which resource roots to search, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Root directories, searched first to last.
    #[serde(default)]
    pub roots: Vec<PathBuf>,
}

impl LoaderConfig {
    /// Resolve relative roots against `base` (normally the config file's directory).
    pub fn rebased(self, base: &Path) -> Self {
        let roots = self
            .roots
            .into_iter()
            .map(|root| if root.is_absolute() { root } else { base.join(root) })
            .collect();
        Self { roots }
    }
}

/// Parse loader configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<LoaderConfig, AppError> {
    let config: LoaderConfig = toml::from_str(content)?;
    Ok(config)
}
