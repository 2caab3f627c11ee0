//! Resolver construction from command-line roots and configuration.

use std::path::{Path, PathBuf};

use crate::app::config::load_config;
use crate::domain::AppError;
use crate::services::FilesystemResolver;

/// Build the filesystem resolver for a set of explicit roots plus an optional
/// config file.
///
/// Explicit roots are searched before configured ones. With no roots at all,
/// the current directory is the only root.
pub fn build_resolver(
    roots: Vec<PathBuf>,
    config_path: Option<&Path>,
) -> Result<FilesystemResolver, AppError> {
    let mut all_roots = roots;
    if let Some(path) = config_path {
        all_roots.extend(load_config(path)?.roots);
    }

    if all_roots.is_empty() {
        return FilesystemResolver::current();
    }
    Ok(FilesystemResolver::with_roots(all_roots))
}
