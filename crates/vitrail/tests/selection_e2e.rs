// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end selection scenarios through the public library surface:
//! registry -> selector -> clipboard wrapper, without touching any real
//! system clipboard.

use vitrail_clipboard::backends::dummy::DummyBackend;
use vitrail_clipboard::Clipboard;
use vitrail_core::error::ResolveError;
use vitrail_core::traits::ClipboardBackend;
use vitrail_core::types::{Category, Platform};
use vitrail_registry::{select_first, Candidate, Registry};

fn make_broken() -> Result<Box<dyn ClipboardBackend>, ResolveError> {
    Err(ResolveError::Unavailable(
        "native dependency missing".to_string(),
    ))
}

fn make_dummy() -> Result<Box<dyn ClipboardBackend>, ResolveError> {
    Ok(Box::new(DummyBackend::construct()?))
}

/// The headline scenario: the only real candidate fails to construct,
/// the dummy fallback engages, and copy/paste still round-trips within
/// the process.
#[test]
fn failed_candidate_falls_back_to_dummy_and_round_trips() {
    let candidates = [Candidate::new("xclip", "clipboard_xclip", make_broken)];
    let fallback = Candidate::new("dummy", "clipboard_dummy", make_dummy);

    let selected = select_first(
        Category::Clipboard,
        &candidates,
        None,
        Some(&fallback),
    )
    .expect("fallback must engage");
    assert_eq!(selected.name, "dummy");
    assert!(selected.is_fallback);

    let mut clipboard = Clipboard::new(
        selected.name,
        selected.is_fallback,
        selected.backend,
        Platform::current(),
    );
    clipboard.copy("abc").unwrap();
    assert_eq!(clipboard.paste().unwrap(), "abc");
}

/// An allow-list restricted to a name that is not registered narrows
/// the candidates to nothing; the fallback still rescues selection.
#[test]
fn misspelled_allowlist_still_yields_a_working_clipboard() {
    let candidates = [Candidate::new("xclip", "clipboard_xclip", make_broken)];
    let fallback = Candidate::new("dummy", "clipboard_dummy", make_dummy);
    let allow = vec!["xklip".to_string()];

    let selected = select_first(
        Category::Clipboard,
        &candidates,
        Some(&allow),
        Some(&fallback),
    )
    .expect("fallback must engage");
    assert!(selected.is_fallback);

    let mut clipboard = Clipboard::new(
        selected.name,
        selected.is_fallback,
        selected.backend,
        Platform::current(),
    );
    clipboard.copy("still works").unwrap();
    assert_eq!(clipboard.paste().unwrap(), "still works");
}

/// The registry lists the dummy last for clipboard on every platform
/// that has real candidates, matching its catch-all role.
#[test]
fn dummy_is_always_the_lowest_priority_clipboard_entry() {
    for platform in [
        Platform::Windows,
        Platform::Linux,
        Platform::MacOs,
        Platform::Android,
        Platform::Other,
    ] {
        let registry = Registry::for_platform(platform).unwrap();
        let providers = registry.providers(Category::Clipboard);
        assert_eq!(providers.last(), Some(&"dummy"), "platform {platform}");
    }
}

/// Selection bootstrap honors the configured allow-list end to end:
/// restricting to the dummy forces the fallback even when real tools
/// might be installed on the test host.
#[test]
fn configured_allowlist_drives_bootstrap() {
    let config = vitrail_config::load_and_validate_str(
        "[providers]\nclipboard = [\"dummy\"]\n",
    )
    .unwrap();
    let registry = Registry::for_platform(Platform::current()).unwrap();

    let allowlist = config.providers.allowlist(Category::Clipboard);
    let mut clipboard =
        vitrail_clipboard::init_clipboard(&registry, allowlist).unwrap();
    assert_eq!(clipboard.provider(), "dummy");

    clipboard.copy("abc").unwrap();
    assert_eq!(clipboard.paste().unwrap(), "abc");
}
