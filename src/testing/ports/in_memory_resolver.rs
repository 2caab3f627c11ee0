//! Test double for `ResourceResolver`.

use std::io::{self, Cursor, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::{ResourceResolver, ResourceStream};

use super::test_files::{TestEntry, TestFiles};

/// In-memory implementation of `ResourceResolver` for unit tests.
///
/// Every seeded identifier gets a `memory:///<id>` location unless one is set
/// explicitly with [`InMemoryResolver::set_location`].
#[derive(Clone, Debug, Default)]
pub struct InMemoryResolver {
    files: TestFiles,
}

impl InMemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &TestFiles {
        &self.files
    }

    pub fn add(&self, id: &str, content: &str) {
        self.files.add(id, content);
    }

    pub fn add_bytes(&self, id: &str, content: &[u8]) {
        self.files.add_bytes(id, content);
    }

    /// Make opening `id` fail with `kind`.
    pub fn fail_open(&self, id: &str, kind: io::ErrorKind) {
        self.files.insert(id, TestEntry::OpenFails(kind));
    }

    /// Make the stream for `id` yield `content` and then fail with `kind`.
    pub fn break_after(&self, id: &str, content: &str, kind: io::ErrorKind) {
        self.files.insert(id, TestEntry::BreaksAfter(content.as_bytes().to_vec(), kind));
    }

    /// Override the raw location reported for `id`.
    pub fn set_location(&self, id: &str, location: &str) {
        self.files.locations.lock().unwrap().insert(id.to_string(), location.to_string());
    }
}

impl ResourceResolver for InMemoryResolver {
    fn open(&self, id: &str) -> io::Result<Option<ResourceStream>> {
        let entry = self.files.entries.lock().unwrap().get(id).cloned();
        let (content, failure) = match entry {
            None => return Ok(None),
            Some(TestEntry::OpenFails(kind)) => {
                return Err(io::Error::new(kind, format!("Mock open failure for {}", id)));
            }
            Some(TestEntry::Bytes(content)) => (content, None),
            Some(TestEntry::BreaksAfter(content, kind)) => (content, Some(kind)),
        };

        self.files.opened.fetch_add(1, Ordering::SeqCst);
        self.files.live_streams.fetch_add(1, Ordering::SeqCst);
        Ok(Some(Box::new(TrackedStream {
            inner: Cursor::new(content),
            failure,
            live: Arc::clone(&self.files.live_streams),
        })))
    }

    fn location(&self, id: &str) -> Option<String> {
        if let Some(location) = self.files.locations.lock().unwrap().get(id) {
            return Some(location.clone());
        }
        self.files.entries.lock().unwrap().contains_key(id).then(|| format!("memory:///{}", id))
    }
}

/// Stream that decrements the live counter when dropped.
struct TrackedStream {
    inner: Cursor<Vec<u8>>,
    failure: Option<io::ErrorKind>,
    live: Arc<AtomicUsize>,
}

impl Read for TrackedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        if read == 0
            && let Some(kind) = self.failure
        {
            return Err(io::Error::new(kind, "Mock stream failure"));
        }
        Ok(read)
    }
}

impl Drop for TrackedStream {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}
