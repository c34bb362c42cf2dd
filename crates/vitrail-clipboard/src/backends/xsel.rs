// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clipboard over the `xsel` command-line tool (X11), the second-choice
//! Linux adapter behind `xclip`.

use std::process::Command;

use vitrail_core::error::{ClipboardError, ResolveError};
use vitrail_core::traits::ClipboardBackend;

use super::{probe, read_stdout, write_stdin};

const BINARY: &str = "xsel";

pub struct XselBackend {
    /// Selection flag: `--clipboard` or `--primary`.
    selection: &'static str,
}

impl XselBackend {
    pub fn construct() -> Result<XselBackend, ResolveError> {
        probe(BINARY, &["--version"])?;
        Ok(XselBackend {
            selection: "--clipboard",
        })
    }

    pub fn construct_primary() -> Result<XselBackend, ResolveError> {
        probe(BINARY, &["--version"])?;
        Ok(XselBackend {
            selection: "--primary",
        })
    }
}

impl ClipboardBackend for XselBackend {
    fn name(&self) -> &'static str {
        "xsel"
    }

    fn get(&mut self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        let mut command = Command::new(BINARY);
        command.args([self.selection, "--output"]);
        read_stdout("xsel", &mut command)
    }

    fn put(&mut self, data: &[u8], _mime_type: &str) -> Result<(), ClipboardError> {
        let mut command = Command::new(BINARY);
        command.args([self.selection, "--input"]);
        write_stdin("xsel", &mut command, data)
    }
}
