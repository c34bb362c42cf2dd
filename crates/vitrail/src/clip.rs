// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vitrail copy` / `vitrail paste` command implementations.
//!
//! Thin wrappers around the clipboard bootstrap: selection runs with the
//! configured allow-list, the winner is used once, and on Linux the
//! copied text is also mirrored into the PRIMARY selection.

use tracing::info;

use vitrail_clipboard::{init_clipboard, init_cut_buffer, Clipboard};
use vitrail_config::VitrailConfig;
use vitrail_core::types::Category;
use vitrail_registry::Registry;

/// Run the `vitrail copy` command.
pub fn copy(config: &VitrailConfig, registry: &Registry, text: &str) -> Result<(), String> {
    let mut clipboard = select(config, registry)?;
    clipboard.copy(text).map_err(|err| err.to_string())?;

    if let Some(mut cut_buffer) = init_cut_buffer(registry, &clipboard) {
        // Mirror failure is not worth failing the copy over.
        if let Err(err) = cut_buffer.set(text) {
            info!(%err, "could not mirror text into the primary selection");
        }
    }

    if clipboard.is_fallback() {
        eprintln!(
            "vitrail: no system clipboard available, text kept in-process only"
        );
    }
    Ok(())
}

/// Run the `vitrail paste` command.
pub fn paste(config: &VitrailConfig, registry: &Registry) -> Result<(), String> {
    let mut clipboard = select(config, registry)?;
    let text = clipboard.paste().map_err(|err| err.to_string())?;
    println!("{text}");
    Ok(())
}

fn select(config: &VitrailConfig, registry: &Registry) -> Result<Clipboard, String> {
    let allowlist = config.providers.allowlist(Category::Clipboard);
    init_clipboard(registry, allowlist).map_err(|err| err.to_string())
}
