// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw clipboard backend contract.
//!
//! These are the primitives every concrete clipboard backend implements.
//! Application code never calls them directly -- the `Clipboard` wrapper
//! in `vitrail-clipboard` layers MIME and text-encoding handling on top
//! and exposes `copy`/`paste`.

use crate::error::ClipboardError;

/// Raw byte-level access to a system clipboard.
pub trait ClipboardBackend {
    /// Backend short name, for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Read the current clipboard content for the given MIME type.
    ///
    /// Returns `Ok(None)` when the clipboard holds no data -- emptiness
    /// is a normal state, not an error.
    fn get(&mut self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError>;

    /// Write `data` to the clipboard under the given MIME type.
    fn put(&mut self, data: &[u8], mime_type: &str) -> Result<(), ClipboardError>;

    /// MIME types the clipboard currently offers.
    ///
    /// The default is an empty list, meaning "unknown/unsupported" --
    /// callers fall back to plain text rather than failing.
    fn get_types(&mut self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl ClipboardBackend for Bare {
        fn name(&self) -> &'static str {
            "bare"
        }
        fn get(&mut self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
            Ok(None)
        }
        fn put(&mut self, _data: &[u8], _mime_type: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    #[test]
    fn get_types_defaults_to_empty() {
        let mut backend = Bare;
        assert!(backend.get_types().is_empty());
    }
}
