// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend adapters over platform clipboard tools.
//!
//! Every adapter compiles on every platform; availability is a runtime
//! question answered by its constructor, which probes for the tool and
//! reports `Unavailable` when it is simply not installed. The selector
//! treats that as routine and moves on to the next candidate.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use vitrail_core::error::{ClipboardError, ResolveError};

pub mod dummy;
pub mod pbcopy;
pub mod powershell;
pub mod xclip;
pub mod xsel;

/// Run a harmless probe command to establish that a tool is usable.
///
/// A missing binary is the expected failure mode and maps to
/// `Unavailable`; a binary that is present but cannot run its own probe
/// maps to `Malformed`, which selection logs loudly.
pub(crate) fn probe(binary: &'static str, args: &[&str]) -> Result<(), ResolveError> {
    let status = Command::new(binary)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(ResolveError::Malformed(format!(
            "`{binary}` probe exited with {status}"
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ResolveError::Unavailable(
            format!("`{binary}` not found on PATH"),
        )),
        Err(err) => Err(ResolveError::Malformed(format!(
            "`{binary}` probe failed: {err}"
        ))),
    }
}

/// Capture a tool's stdout as clipboard bytes.
///
/// A non-zero exit is how these tools report an empty selection, so it
/// maps to "no data" rather than an error.
pub(crate) fn read_stdout(
    backend: &'static str,
    command: &mut Command,
) -> Result<Option<Vec<u8>>, ClipboardError> {
    let output = command
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|err| ClipboardError::Backend {
            backend,
            message: err.to_string(),
        })?;
    if !output.status.success() || output.stdout.is_empty() {
        return Ok(None);
    }
    Ok(Some(output.stdout))
}

/// Feed clipboard bytes to a tool's stdin and wait for it to finish.
///
/// The selection-owning tools fork into the background after reading
/// stdin, so the wait returns promptly.
pub(crate) fn write_stdin(
    backend: &'static str,
    command: &mut Command,
    data: &[u8],
) -> Result<(), ClipboardError> {
    let backend_error = |message: String| ClipboardError::Backend { backend, message };

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| backend_error(err.to_string()))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| backend_error("child stdin was not captured".to_string()))?;
    stdin
        .write_all(data)
        .map_err(|err| backend_error(err.to_string()))?;
    drop(stdin);

    let status = child
        .wait()
        .map_err(|err| backend_error(err.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(backend_error(format!("exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_of_a_missing_binary_is_unavailable() {
        let err = probe("vitrail-no-such-tool", &[]).unwrap_err();
        assert!(matches!(err, ResolveError::Unavailable(_)));
    }

    #[test]
    fn probe_of_a_failing_binary_is_malformed() {
        // `false` exists on every Unix test host and always exits 1.
        if cfg!(unix) {
            let err = probe("false", &[]).unwrap_err();
            assert!(matches!(err, ResolveError::Malformed(_)));
        }
    }

    #[test]
    fn read_stdout_maps_failure_exit_to_no_data() {
        if cfg!(unix) {
            let data = read_stdout("test", &mut Command::new("false")).unwrap();
            assert!(data.is_none());
        }
    }

    #[test]
    fn read_stdout_captures_bytes() {
        if cfg!(unix) {
            let mut command = Command::new("echo");
            command.arg("-n").arg("payload");
            let data = read_stdout("test", &mut command).unwrap();
            assert_eq!(data.as_deref(), Some(b"payload".as_slice()));
        }
    }

    #[test]
    fn write_stdin_delivers_bytes_and_waits() {
        if cfg!(unix) {
            // `cat` to /dev/null consumes stdin and exits cleanly.
            let mut command = Command::new("cat");
            write_stdin("test", &mut command, b"payload").unwrap();
        }
    }
}
