// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The clipboard capability wrapper.
//!
//! Wraps the selected backend and layers the text convention on top of
//! its raw `get`/`put` primitives: `copy` encodes per the platform
//! convention, `paste` decodes lossily, strips embedded NULs (an
//! artifact of some platform clipboards), and turns "no data" into an
//! empty string rather than an error.

use std::cell::OnceCell;

use vitrail_core::error::ClipboardError;
use vitrail_core::traits::ClipboardBackend;
use vitrail_core::types::Platform;

use crate::convention::{Convention, FALLBACK_MIME};

/// The process-wide clipboard handle.
///
/// Constructed once by [`bootstrap::init_clipboard`] and threaded
/// through by the caller; there is no global instance. The text
/// convention is computed lazily on the first `copy`/`paste` and cached
/// for the instance's lifetime -- the transition is one-way.
///
/// [`bootstrap::init_clipboard`]: crate::bootstrap::init_clipboard
pub struct Clipboard {
    provider: &'static str,
    is_fallback: bool,
    backend: Box<dyn ClipboardBackend>,
    platform: Platform,
    convention: OnceCell<Convention>,
}

impl Clipboard {
    pub fn new(
        provider: &'static str,
        is_fallback: bool,
        backend: Box<dyn ClipboardBackend>,
        platform: Platform,
    ) -> Clipboard {
        Clipboard {
            provider,
            is_fallback,
            backend,
            platform,
            convention: OnceCell::new(),
        }
    }

    /// Short name of the active provider.
    pub fn provider(&self) -> &'static str {
        self.provider
    }

    /// Whether the active provider is the no-op fallback.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    fn convention(&self) -> Convention {
        *self
            .convention
            .get_or_init(|| Convention::configure(self.platform))
    }

    /// Copy text to the clipboard.
    ///
    /// Empty input is a no-op -- the backend is not called at all.
    pub fn copy(&mut self, data: &str) -> Result<(), ClipboardError> {
        if data.is_empty() {
            return Ok(());
        }
        let convention = self.convention();
        let bytes = convention.encoding.encode(data);
        self.backend.put(&bytes, convention.mime_type)
    }

    /// Get text from the clipboard as a usable string.
    ///
    /// Prefers the platform convention's MIME type when the backend
    /// advertises it, otherwise degrades to generic `text/plain`. An
    /// empty clipboard yields `Ok("")`, never an error.
    pub fn paste(&mut self) -> Result<String, ClipboardError> {
        let convention = self.convention();

        let types = self.backend.get_types();
        let mime_type = if types.iter().any(|t| t == convention.mime_type) {
            convention.mime_type
        } else {
            FALLBACK_MIME
        };

        match self.backend.get(mime_type)? {
            Some(bytes) => {
                let text = convention.encoding.decode_lossy(&bytes);
                // NUL stripping: some platform clipboards pad with
                // embedded null characters.
                Ok(text.replace('\0', ""))
            }
            None => Ok(String::new()),
        }
    }
}
