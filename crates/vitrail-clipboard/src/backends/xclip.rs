// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clipboard over the `xclip` command-line tool (X11).

use std::process::Command;

use vitrail_core::error::{ClipboardError, ResolveError};
use vitrail_core::traits::ClipboardBackend;

use super::{probe, read_stdout, write_stdin};

const BINARY: &str = "xclip";

pub struct XclipBackend {
    /// X selection to operate on: `clipboard` or `primary`.
    selection: &'static str,
}

impl XclipBackend {
    /// Adapter over the CLIPBOARD selection, the regular copy/paste one.
    pub fn construct() -> Result<XclipBackend, ResolveError> {
        probe(BINARY, &["-version"])?;
        Ok(XclipBackend {
            selection: "clipboard",
        })
    }

    /// Adapter over the PRIMARY selection, used by the cut buffer.
    pub fn construct_primary() -> Result<XclipBackend, ResolveError> {
        probe(BINARY, &["-version"])?;
        Ok(XclipBackend {
            selection: "primary",
        })
    }
}

impl ClipboardBackend for XclipBackend {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn get(&mut self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        let mut command = Command::new(BINARY);
        command.args(["-selection", self.selection, "-o"]);
        read_stdout("xclip", &mut command)
    }

    fn put(&mut self, data: &[u8], _mime_type: &str) -> Result<(), ClipboardError> {
        let mut command = Command::new(BINARY);
        command.args(["-selection", self.selection, "-i"]);
        write_stdin("xclip", &mut command, data)
    }
}
