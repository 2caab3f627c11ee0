use std::io::{self, Cursor};

use include_dir::Dir;
use log::{debug, trace};

use crate::domain::{listing, resource_id};
use crate::ports::{ResourceResolver, ResourceStream};

/// Resolver over a directory tree compiled into the binary with `include_dir!`.
#[derive(Debug, Clone)]
pub struct EmbeddedResolver {
    bundle: String,
    dir: &'static Dir<'static>,
}

enum Embedded {
    File(&'static [u8]),
    Dir(&'static Dir<'static>),
}

impl EmbeddedResolver {
    /// `bundle` names the tree in generated locations (`embedded://<bundle>/...`).
    pub fn new<S: Into<String>>(bundle: S, dir: &'static Dir<'static>) -> Self {
        Self { bundle: bundle.into(), dir }
    }

    fn find(&self, id: &str) -> Option<(String, Embedded)> {
        let path = resource_id::normalized(id)?;
        let root: &'static Dir<'static> = self.dir;

        let found = if path.is_empty() {
            Some(Embedded::Dir(root))
        } else if let Some(file) = root.get_file(&path) {
            Some(Embedded::File(file.contents()))
        } else {
            root.get_dir(&path).map(Embedded::Dir)
        };

        match &found {
            Some(_) => debug!("Resolved resource '{}' in bundle '{}'", id, self.bundle),
            None => trace!("Resource '{}' not found in bundle '{}'", id, self.bundle),
        }
        found.map(|entry| (path, entry))
    }
}

fn directory_listing(dir: &Dir<'_>) -> Vec<u8> {
    let names = dir
        .entries()
        .iter()
        .filter_map(|entry| entry.path().file_name())
        .map(|name| name.to_string_lossy().to_string());
    listing::render(names)
}

impl ResourceResolver for EmbeddedResolver {
    fn open(&self, id: &str) -> io::Result<Option<ResourceStream>> {
        let stream: ResourceStream = match self.find(id) {
            Some((_, Embedded::File(contents))) => Box::new(Cursor::new(contents)),
            Some((_, Embedded::Dir(dir))) => Box::new(Cursor::new(directory_listing(dir))),
            None => return Ok(None),
        };
        Ok(Some(stream))
    }

    fn location(&self, id: &str) -> Option<String> {
        let (path, entry) = self.find(id)?;
        let suffix = match entry {
            Embedded::Dir(_) if !path.is_empty() => "/",
            _ => "",
        };
        Some(format!("embedded://{}/{}{}", self.bundle, path, suffix))
    }
}
