// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clipboard over the macOS `pbcopy`/`pbpaste` pair.

use std::process::Command;

use vitrail_core::error::{ClipboardError, ResolveError};
use vitrail_core::traits::ClipboardBackend;

use super::{probe, read_stdout, write_stdin};

pub struct PbcopyBackend;

impl PbcopyBackend {
    pub fn construct() -> Result<PbcopyBackend, ResolveError> {
        // Probe the read side: running `pbcopy` itself would overwrite
        // the pasteboard with empty input.
        probe("pbpaste", &[])?;
        Ok(PbcopyBackend)
    }
}

impl ClipboardBackend for PbcopyBackend {
    fn name(&self) -> &'static str {
        "pbcopy"
    }

    fn get(&mut self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        read_stdout("pbcopy", &mut Command::new("pbpaste"))
    }

    fn put(&mut self, data: &[u8], _mime_type: &str) -> Result<(), ClipboardError> {
        write_stdin("pbcopy", &mut Command::new("pbcopy"), data)
    }
}
