use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use url::Url;

use crate::domain::{AppError, listing, resource_id};
use crate::ports::{ResourceResolver, ResourceStream};

/// Filesystem-based resolver searching an ordered list of root directories.
#[derive(Debug, Clone)]
pub struct FilesystemResolver {
    roots: Vec<PathBuf>,
}

impl FilesystemResolver {
    /// Create a resolver for a single root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { roots: vec![root] }
    }

    /// Create a resolver searching `roots` first to last.
    pub fn with_roots<I>(roots: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        Self { roots: roots.into_iter().collect() }
    }

    /// Create a resolver rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn find(&self, id: &str) -> Option<PathBuf> {
        let relative = resource_id::relative_path(id)?;

        for root in &self.roots {
            let candidate = root.join(&relative);
            if candidate.exists() {
                debug!("Resolved resource '{}' under {}", id, root.display());
                return Some(candidate);
            }
        }

        trace!("Resource '{}' not found in {} root(s)", id, self.roots.len());
        None
    }
}

fn directory_listing(path: &Path) -> io::Result<Vec<u8>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    Ok(listing::render(names))
}

impl ResourceResolver for FilesystemResolver {
    fn open(&self, id: &str) -> io::Result<Option<ResourceStream>> {
        let Some(path) = self.find(id) else {
            return Ok(None);
        };

        if path.is_dir() {
            let manifest = directory_listing(&path)?;
            return Ok(Some(Box::new(Cursor::new(manifest))));
        }

        let file = File::open(&path)?;
        Ok(Some(Box::new(file)))
    }

    fn location(&self, id: &str) -> Option<String> {
        let path = self.find(id)?;
        let absolute = fs::canonicalize(&path).or_else(|_| std::path::absolute(&path)).ok()?;

        let url = if absolute.is_dir() {
            Url::from_directory_path(&absolute)
        } else {
            Url::from_file_path(&absolute)
        };
        url.ok().map(String::from)
    }
}
