// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The X11 PRIMARY-selection mirror.
//!
//! On Linux, selected text is conventionally mirrored into the PRIMARY
//! selection so middle-click can paste it. The cut buffer is a second
//! backend of the same kind as the active clipboard provider, pointed
//! at PRIMARY instead of CLIPBOARD. It is always UTF-8 text and has no
//! fallback: when no X tool is available the cut buffer simply does not
//! exist.

use vitrail_core::error::ClipboardError;
use vitrail_core::traits::ClipboardBackend;

use crate::convention::TextEncoding;

const PRIMARY_MIME: &str = "text/plain;charset=utf-8";

pub struct CutBuffer {
    backend: Box<dyn ClipboardBackend>,
}

impl CutBuffer {
    pub fn new(backend: Box<dyn ClipboardBackend>) -> CutBuffer {
        CutBuffer { backend }
    }

    /// Mirror selected text into PRIMARY. Empty text is a no-op, same as
    /// the clipboard's `copy`.
    pub fn set(&mut self, data: &str) -> Result<(), ClipboardError> {
        if data.is_empty() {
            return Ok(());
        }
        let bytes = TextEncoding::Utf8.encode(data);
        self.backend.put(&bytes, PRIMARY_MIME)
    }

    /// Read PRIMARY back as text; empty selection yields `""`.
    pub fn get(&mut self) -> Result<String, ClipboardError> {
        match self.backend.get(PRIMARY_MIME)? {
            Some(bytes) => Ok(TextEncoding::Utf8.decode_lossy(&bytes).replace('\0', "")),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::dummy::DummyBackend;

    #[test]
    fn set_then_get_round_trips() {
        let mut cut_buffer = CutBuffer::new(Box::new(DummyBackend::default()));
        cut_buffer.set("middle-click me").unwrap();
        assert_eq!(cut_buffer.get().unwrap(), "middle-click me");
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let mut cut_buffer = CutBuffer::new(Box::new(DummyBackend::default()));
        cut_buffer.set("").unwrap();
        assert_eq!(cut_buffer.get().unwrap(), "");
    }
}
