// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiring from the registry to a working clipboard.
//!
//! Maps each registered clipboard module identifier to its backend
//! factory, runs first-success selection over the real candidates with
//! the no-op dummy held back as fallback, and wraps the winner in the
//! [`Clipboard`] handle.

use tracing::warn;

use vitrail_core::error::{ResolveError, SelectError};
use vitrail_core::traits::ClipboardBackend;
use vitrail_core::types::{Category, Platform};
use vitrail_registry::entry::Candidate;
use vitrail_registry::registry::Registry;
use vitrail_registry::selector::select_first;

use crate::backends::dummy::DummyBackend;
use crate::backends::pbcopy::PbcopyBackend;
use crate::backends::powershell::PowershellBackend;
use crate::backends::xclip::XclipBackend;
use crate::backends::xsel::XselBackend;
use crate::clipboard::Clipboard;
use crate::cut_buffer::CutBuffer;

type BackendFactory = fn() -> Result<Box<dyn ClipboardBackend>, ResolveError>;

fn make_dummy() -> Result<Box<dyn ClipboardBackend>, ResolveError> {
    Ok(Box::new(DummyBackend::construct()?))
}

fn make_xclip() -> Result<Box<dyn ClipboardBackend>, ResolveError> {
    Ok(Box::new(XclipBackend::construct()?))
}

fn make_xclip_primary() -> Result<Box<dyn ClipboardBackend>, ResolveError> {
    Ok(Box::new(XclipBackend::construct_primary()?))
}

fn make_xsel() -> Result<Box<dyn ClipboardBackend>, ResolveError> {
    Ok(Box::new(XselBackend::construct()?))
}

fn make_xsel_primary() -> Result<Box<dyn ClipboardBackend>, ResolveError> {
    Ok(Box::new(XselBackend::construct_primary()?))
}

fn make_pbcopy() -> Result<Box<dyn ClipboardBackend>, ResolveError> {
    Ok(Box::new(PbcopyBackend::construct()?))
}

fn make_powershell() -> Result<Box<dyn ClipboardBackend>, ResolveError> {
    Ok(Box::new(PowershellBackend::construct()?))
}

/// Factory for a registered clipboard module identifier.
///
/// Every identifier the registry can emit must have an arm here; the
/// conformance test below checks the two stay in sync.
fn factory_for(module_id: &str) -> Option<BackendFactory> {
    match module_id {
        "clipboard_dummy" => Some(make_dummy),
        "clipboard_xclip" => Some(make_xclip),
        "clipboard_xsel" => Some(make_xsel),
        "clipboard_pbcopy" => Some(make_pbcopy),
        "clipboard_powershell" => Some(make_powershell),
        _ => None,
    }
}

/// Select and construct the clipboard provider for this registry.
///
/// The dummy entry is held back from the candidate list and offered to
/// the selector as the fallback, so it can only win when every real
/// candidate has failed (or the allow-list excluded them all).
pub fn init_clipboard(
    registry: &Registry,
    allowlist: Option<&[String]>,
) -> Result<Clipboard, SelectError> {
    let mut candidates = Vec::new();
    let mut fallback = None;

    for entry in registry.entries(Category::Clipboard) {
        let Some(construct) = factory_for(entry.module_id) else {
            warn!(
                provider = entry.name,
                module = entry.module_id,
                "registered clipboard provider has no factory, skipping"
            );
            continue;
        };
        let candidate = Candidate::new(entry.name, entry.module_id, construct);
        if entry.name == "dummy" {
            fallback = Some(candidate);
        } else {
            candidates.push(candidate);
        }
    }

    let allowlist = without_dummy(allowlist);
    let selected = select_first(
        Category::Clipboard,
        &candidates,
        allowlist.as_deref(),
        fallback.as_ref(),
    )?;
    Ok(Clipboard::new(
        selected.name,
        selected.is_fallback,
        selected.backend,
        registry.platform(),
    ))
}

/// Drop the fallback's name from the allow-list before selection.
///
/// The dummy is never a regular candidate, so leaving it in would make
/// the selector warn about an unknown name even though it is a
/// registered provider. Selection reaches the fallback anyway once the
/// remaining names are exhausted.
fn without_dummy(allowlist: Option<&[String]>) -> Option<Vec<String>> {
    allowlist.map(|names| {
        names
            .iter()
            .filter(|name| name.as_str() != "dummy")
            .cloned()
            .collect()
    })
}

/// Construct the PRIMARY-selection cut buffer, if the platform has one.
///
/// Only Linux mirrors selections. When the active clipboard provider is
/// an X tool the cut buffer reuses its kind pointed at PRIMARY; when it
/// is not (say the allow-list forced the dummy), the X candidates get a
/// second pass in priority order, so an installed xclip or xsel still
/// serves middle-click paste. Absence is normal and returns `None`
/// rather than an error.
pub fn init_cut_buffer(registry: &Registry, clipboard: &Clipboard) -> Option<CutBuffer> {
    if registry.platform() != Platform::Linux {
        return None;
    }
    for (name, construct) in primary_candidates(clipboard.provider()) {
        match construct() {
            Ok(backend) => return Some(CutBuffer::new(backend)),
            Err(reason) => {
                warn!(provider = name, %reason, "primary-selection candidate unavailable");
            }
        }
    }
    None
}

/// PRIMARY-capable factories to try for a given clipboard winner.
fn primary_candidates(provider: &str) -> Vec<(&'static str, BackendFactory)> {
    match provider {
        "xclip" => vec![("xclip", make_xclip_primary as BackendFactory)],
        "xsel" => vec![("xsel", make_xsel_primary as BackendFactory)],
        _ => vec![
            ("xclip", make_xclip_primary as BackendFactory),
            ("xsel", make_xsel_primary as BackendFactory),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_clipboard_provider_has_a_factory() {
        for platform in [
            Platform::Windows,
            Platform::Linux,
            Platform::MacOs,
            Platform::Android,
            Platform::Other,
        ] {
            let registry = Registry::for_platform(platform).unwrap();
            for entry in registry.entries(Category::Clipboard) {
                assert!(
                    factory_for(entry.module_id).is_some(),
                    "no factory for {}",
                    entry.module_id
                );
            }
        }
    }

    #[test]
    fn unknown_module_id_has_no_factory() {
        assert!(factory_for("clipboard_carbon").is_none());
        assert!(factory_for("window_sdl").is_none());
    }

    #[test]
    fn dummy_allowlist_engages_the_fallback() {
        // The dummy is never a regular candidate, so allow-listing only
        // it narrows the candidates to nothing and the fallback wins.
        let registry = Registry::for_platform(Platform::current()).unwrap();
        let allow = vec!["dummy".to_string()];
        let mut clipboard = init_clipboard(&registry, Some(&allow)).unwrap();
        assert_eq!(clipboard.provider(), "dummy");
        assert!(clipboard.is_fallback());

        clipboard.copy("abc").unwrap();
        assert_eq!(clipboard.paste().unwrap(), "abc");
    }

    #[test]
    fn cut_buffer_is_absent_off_linux() {
        let registry = Registry::for_platform(Platform::Other).unwrap();
        let clipboard = init_clipboard(&registry, None).unwrap();
        assert!(init_cut_buffer(&registry, &clipboard).is_none());
    }

    #[test]
    fn non_x_winner_still_tries_the_x_candidates_for_primary() {
        // A dummy-forced clipboard must not disable middle-click paste
        // when an X tool is installed.
        let names: Vec<_> = primary_candidates("dummy")
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names, vec!["xclip", "xsel"]);

        let names: Vec<_> = primary_candidates("xsel")
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names, vec!["xsel"]);
    }

    #[test]
    fn allowlist_keeps_real_names_and_drops_the_fallback() {
        let allow = vec!["xclip".to_string(), "dummy".to_string()];
        assert_eq!(
            without_dummy(Some(&allow)),
            Some(vec!["xclip".to_string()])
        );
        assert_eq!(without_dummy(None), None);
    }
}
