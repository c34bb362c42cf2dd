// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process no-op clipboard, the registered fallback.
//!
//! Holds the last `put` verbatim and hands it back on `get`, so copy
//! and paste still round-trip within the process even when no platform
//! clipboard is reachable. Nothing ever leaves the process.

use vitrail_core::error::{ClipboardError, ResolveError};
use vitrail_core::traits::ClipboardBackend;

#[derive(Default)]
pub struct DummyBackend {
    stored: Option<(Vec<u8>, String)>,
}

impl DummyBackend {
    /// Construction cannot fail; that is the point of a fallback.
    pub fn construct() -> Result<DummyBackend, ResolveError> {
        Ok(DummyBackend::default())
    }
}

impl ClipboardBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "dummy"
    }

    fn get(&mut self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        // The stored bytes are returned for any requested type; the
        // store only ever holds what this process put there.
        Ok(self.stored.as_ref().map(|(bytes, _)| bytes.clone()))
    }

    fn put(&mut self, data: &[u8], mime_type: &str) -> Result<(), ClipboardError> {
        self.stored = Some((data.to_vec(), mime_type.to_string()));
        Ok(())
    }

    fn get_types(&mut self) -> Vec<String> {
        self.stored
            .as_ref()
            .map(|(_, mime)| vec![mime.clone()])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_bytes_verbatim() {
        let mut backend = DummyBackend::construct().unwrap();
        backend.put(&[1, 2, 3], "application/octet-stream").unwrap();
        assert_eq!(
            backend.get("application/octet-stream").unwrap(),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn advertises_the_stored_type() {
        let mut backend = DummyBackend::construct().unwrap();
        assert!(backend.get_types().is_empty());
        backend.put(b"x", "text/plain").unwrap();
        assert_eq!(backend.get_types(), vec!["text/plain".to_string()]);
    }

    #[test]
    fn empty_store_reads_as_no_data() {
        let mut backend = DummyBackend::construct().unwrap();
        assert_eq!(backend.get("text/plain").unwrap(), None);
    }

    #[test]
    fn later_put_replaces_earlier() {
        let mut backend = DummyBackend::construct().unwrap();
        backend.put(b"first", "text/plain").unwrap();
        backend.put(b"second", "text/plain").unwrap();
        assert_eq!(backend.get("text/plain").unwrap(), Some(b"second".to_vec()));
    }
}
