//! Shared in-memory resource backing store for port-scoped test doubles.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What an identifier maps to in the in-memory store.
#[derive(Clone, Debug)]
pub(crate) enum TestEntry {
    /// Plain content.
    Bytes(Vec<u8>),
    /// Opening fails with this error kind.
    OpenFails(io::ErrorKind),
    /// Opening succeeds, the stream yields these bytes and then fails.
    BreaksAfter(Vec<u8>, io::ErrorKind),
}

/// In-memory resource storage shared across test doubles.
///
/// Tests seed resources via this handle before passing the resolver double to
/// production code. It also counts streams that are still open so tests can
/// check that accessors release what they acquire.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) entries: Arc<Mutex<HashMap<String, TestEntry>>>,
    pub(crate) locations: Arc<Mutex<HashMap<String, String>>>,
    pub(crate) live_streams: Arc<AtomicUsize>,
    pub(crate) opened: Arc<AtomicUsize>,
}

impl TestFiles {
    /// Seed a UTF-8 resource.
    pub fn add(&self, id: &str, content: &str) {
        self.add_bytes(id, content.as_bytes());
    }

    /// Seed a binary resource.
    pub fn add_bytes(&self, id: &str, content: &[u8]) {
        self.insert(id, TestEntry::Bytes(content.to_vec()));
    }

    pub(crate) fn insert(&self, id: &str, entry: TestEntry) {
        self.entries.lock().unwrap().insert(id.to_string(), entry);
    }

    /// Streams opened and not yet dropped.
    pub fn live_streams(&self) -> usize {
        self.live_streams.load(Ordering::SeqCst)
    }

    /// Streams opened in total.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}
