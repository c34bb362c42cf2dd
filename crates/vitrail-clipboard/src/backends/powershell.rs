// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clipboard over Windows PowerShell's `Get-Clipboard`/`Set-Clipboard`.
//!
//! The console encoding is forced to Unicode on both directions so the
//! bytes crossing the pipe are UTF-16-LE, matching the Windows text
//! convention the wrapper encodes with.

use std::process::Command;

use vitrail_core::error::{ClipboardError, ResolveError};
use vitrail_core::traits::ClipboardBackend;

use super::{probe, read_stdout, write_stdin};

const BINARY: &str = "powershell";

const GET_SCRIPT: &str =
    "[Console]::OutputEncoding = [Text.Encoding]::Unicode; Get-Clipboard -Raw";
const SET_SCRIPT: &str =
    "[Console]::InputEncoding = [Text.Encoding]::Unicode; $input | Set-Clipboard";

pub struct PowershellBackend;

impl PowershellBackend {
    pub fn construct() -> Result<PowershellBackend, ResolveError> {
        probe(BINARY, &["-NoProfile", "-NonInteractive", "-Command", "$null"])?;
        Ok(PowershellBackend)
    }
}

fn powershell(script: &str) -> Command {
    let mut command = Command::new(BINARY);
    command.args(["-NoProfile", "-NonInteractive", "-Command", script]);
    command
}

impl ClipboardBackend for PowershellBackend {
    fn name(&self) -> &'static str {
        "powershell"
    }

    fn get(&mut self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        read_stdout("powershell", &mut powershell(GET_SCRIPT))
    }

    fn put(&mut self, data: &[u8], _mime_type: &str) -> Result<(), ClipboardError> {
        write_stdin("powershell", &mut powershell(SET_SCRIPT), data)
    }
}
