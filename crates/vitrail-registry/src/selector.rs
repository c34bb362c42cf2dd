// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! First-success provider selection.
//!
//! Candidates are tried strictly in priority order (or in allow-list
//! order when the configuration restricts a category). A failed
//! construction is routine: it is logged and the next candidate is
//! tried. Only when everything failed -- including a registered no-op
//! fallback, if any -- does selection itself fail.

use tracing::{debug, error, info, warn};

use vitrail_core::error::{ResolveError, SelectError};
use vitrail_core::types::Category;

use crate::entry::{Candidate, Selected};

/// Select the single active provider for a category.
///
/// When `allowlist` is given, candidates are restricted to exactly that
/// subset and reordered to match it, so configuration can override the
/// default priority. Construction stops at the first success; later
/// candidates are never attempted.
///
/// If every candidate fails, `fallback` (the category's no-op provider)
/// is constructed and returned with a warning; without a fallback the
/// category ends up with no provider, which is fatal.
pub fn select_first<T>(
    category: Category,
    candidates: &[Candidate<T>],
    allowlist: Option<&[String]>,
    fallback: Option<&Candidate<T>>,
) -> Result<Selected<T>, SelectError> {
    for candidate in ordered(category, candidates, allowlist) {
        match try_construct(category, candidate) {
            Some(backend) => {
                info!(
                    category = %category,
                    provider = candidate.name,
                    "provider selected"
                );
                return Ok(Selected {
                    name: candidate.name,
                    backend,
                    is_fallback: false,
                });
            }
            None => continue,
        }
    }

    if let Some(candidate) = fallback {
        if let Some(backend) = try_construct(category, candidate) {
            warn!(
                category = %category,
                provider = candidate.name,
                "no real provider available, using no-op fallback"
            );
            return Ok(Selected {
                name: candidate.name,
                backend,
                is_fallback: true,
            });
        }
    }

    Err(SelectError::NoProviderAvailable { category })
}

/// Select every provider that constructs successfully, for categories
/// that run multiple backends at once (e.g. input devices).
///
/// Same allow-list and fallback semantics as [`select_first`], but every
/// successful construction is kept, in priority order.
pub fn select_all<T>(
    category: Category,
    candidates: &[Candidate<T>],
    allowlist: Option<&[String]>,
    fallback: Option<&Candidate<T>>,
) -> Result<Vec<Selected<T>>, SelectError> {
    let mut selected = Vec::new();
    for candidate in ordered(category, candidates, allowlist) {
        if let Some(backend) = try_construct(category, candidate) {
            debug!(
                category = %category,
                provider = candidate.name,
                "provider activated"
            );
            selected.push(Selected {
                name: candidate.name,
                backend,
                is_fallback: false,
            });
        }
    }

    if selected.is_empty() {
        if let Some(candidate) = fallback {
            if let Some(backend) = try_construct(category, candidate) {
                warn!(
                    category = %category,
                    provider = candidate.name,
                    "no real provider available, using no-op fallback"
                );
                selected.push(Selected {
                    name: candidate.name,
                    backend,
                    is_fallback: true,
                });
            }
        }
    }

    if selected.is_empty() {
        return Err(SelectError::NoProviderAvailable { category });
    }
    Ok(selected)
}

/// Apply the allow-list: restrict to the listed names, in list order.
///
/// Names in the allow-list that match no candidate are skipped with a
/// warning -- a typo in configuration must not abort selection, it only
/// narrows it.
fn ordered<'c, T>(
    category: Category,
    candidates: &'c [Candidate<T>],
    allowlist: Option<&[String]>,
) -> Vec<&'c Candidate<T>> {
    match allowlist {
        None => candidates.iter().collect(),
        Some(allowed) => {
            let mut result = Vec::with_capacity(allowed.len());
            for name in allowed {
                match candidates.iter().find(|c| c.name == name.as_str()) {
                    Some(candidate) => result.push(candidate),
                    None => warn!(
                        category = %category,
                        provider = %name,
                        "allow-listed provider is not a registered candidate, skipping"
                    ),
                }
            }
            result
        }
    }
}

/// Run a candidate's factory, containing its failure.
///
/// `Unavailable` is the expected outcome for platform-mismatched
/// backends and logs at warn level; `Malformed` means the backend is
/// present but broken and logs at error level. Neither propagates --
/// selection simply moves on.
fn try_construct<T>(category: Category, candidate: &Candidate<T>) -> Option<T> {
    match (candidate.construct)() {
        Ok(backend) => Some(backend),
        Err(ResolveError::Unavailable(reason)) => {
            warn!(
                category = %category,
                provider = candidate.name,
                module = candidate.module_id,
                %reason,
                "provider unavailable"
            );
            None
        }
        Err(ResolveError::Malformed(reason)) => {
            error!(
                category = %category,
                provider = candidate.name,
                module = candidate.module_id,
                %reason,
                "provider present but broken"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_alpha() -> Result<&'static str, ResolveError> {
        Ok("alpha")
    }

    fn ok_beta() -> Result<&'static str, ResolveError> {
        Ok("beta")
    }

    fn ok_dummy() -> Result<&'static str, ResolveError> {
        Ok("dummy")
    }

    fn fail_unavailable() -> Result<&'static str, ResolveError> {
        Err(ResolveError::Unavailable("missing binary".into()))
    }

    fn fail_malformed() -> Result<&'static str, ResolveError> {
        Err(ResolveError::Malformed("broken install".into()))
    }

    fn must_not_run() -> Result<&'static str, ResolveError> {
        panic!("candidate after the winner must never be attempted");
    }

    fn c(name: &'static str, construct: fn() -> Result<&'static str, ResolveError>) -> Candidate<&'static str> {
        // Test candidates all live in the clipboard category.
        let module_id: &'static str = match name {
            "alpha" => "clipboard_alpha",
            "beta" => "clipboard_beta",
            "gamma" => "clipboard_gamma",
            "dummy" => "clipboard_dummy",
            other => panic!("unexpected test candidate {other}"),
        };
        Candidate::new(name, module_id, construct)
    }

    #[test]
    fn first_successful_candidate_wins() {
        let candidates = [c("alpha", ok_alpha), c("beta", ok_beta)];
        let selected =
            select_first(Category::Clipboard, &candidates, None, None).unwrap();
        assert_eq!(selected.name, "alpha");
        assert_eq!(selected.backend, "alpha");
        assert!(!selected.is_fallback);
    }

    #[test]
    fn failures_are_skipped_until_a_success() {
        let candidates = [
            c("alpha", fail_unavailable),
            c("beta", fail_malformed),
            c("gamma", ok_beta),
        ];
        let selected =
            select_first(Category::Clipboard, &candidates, None, None).unwrap();
        assert_eq!(selected.name, "gamma");
    }

    #[test]
    fn no_candidate_after_the_winner_is_attempted() {
        let candidates = [
            c("alpha", fail_unavailable),
            c("beta", ok_beta),
            c("gamma", must_not_run),
        ];
        let selected =
            select_first(Category::Clipboard, &candidates, None, None).unwrap();
        assert_eq!(selected.name, "beta");
    }

    #[test]
    fn fallback_engages_when_everything_fails() {
        let candidates = [c("alpha", fail_unavailable), c("beta", fail_unavailable)];
        let fallback = c("dummy", ok_dummy);
        let selected =
            select_first(Category::Clipboard, &candidates, None, Some(&fallback)).unwrap();
        assert_eq!(selected.name, "dummy");
        assert!(selected.is_fallback);
    }

    #[test]
    fn no_provider_available_without_fallback() {
        let candidates = [c("alpha", fail_unavailable)];
        let err = select_first(Category::Clipboard, &candidates, None, None).unwrap_err();
        assert_eq!(
            err,
            SelectError::NoProviderAvailable {
                category: Category::Clipboard
            }
        );
    }

    #[test]
    fn allowlist_restricts_and_reorders() {
        let candidates = [c("alpha", must_not_run), c("beta", ok_beta), c("gamma", ok_alpha)];
        let allow = vec!["gamma".to_string(), "beta".to_string()];
        let selected =
            select_first(Category::Clipboard, &candidates, Some(&allow), None).unwrap();
        // gamma comes first in the allow-list, so it wins even though
        // beta has higher default priority.
        assert_eq!(selected.name, "gamma");
    }

    #[test]
    fn allowlist_with_unknown_names_narrows_to_nothing() {
        let candidates = [c("alpha", ok_alpha)];
        let allow = vec!["nonexistent".to_string()];
        let fallback = c("dummy", ok_dummy);
        let selected =
            select_first(Category::Clipboard, &candidates, Some(&allow), Some(&fallback))
                .unwrap();
        assert!(selected.is_fallback);
        assert_eq!(selected.name, "dummy");
    }

    #[test]
    fn empty_allowlist_intersection_without_fallback_fails() {
        let candidates = [c("alpha", ok_alpha)];
        let allow: Vec<String> = vec![];
        let err = select_first(Category::Clipboard, &candidates, Some(&allow), None)
            .unwrap_err();
        assert_eq!(
            err,
            SelectError::NoProviderAvailable {
                category: Category::Clipboard
            }
        );
    }

    #[test]
    fn select_all_accumulates_every_success() {
        let candidates = [
            c("alpha", ok_alpha),
            c("beta", fail_unavailable),
            c("gamma", ok_beta),
        ];
        let selected = select_all(Category::Input, &candidates, None, None).unwrap();
        let names: Vec<_> = selected.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["alpha", "gamma"]);
        assert!(selected.iter().all(|s| !s.is_fallback));
    }

    #[test]
    fn select_all_falls_back_when_empty() {
        let candidates = [c("alpha", fail_unavailable)];
        let fallback = c("dummy", ok_dummy);
        let selected =
            select_all(Category::Input, &candidates, None, Some(&fallback)).unwrap();
        assert_eq!(selected.len(), 1);
        assert!(selected[0].is_fallback);
    }

    #[test]
    fn select_all_errors_when_nothing_constructs() {
        let candidates = [c("alpha", fail_unavailable), c("beta", fail_malformed)];
        let err = select_all(Category::Input, &candidates, None, None).unwrap_err();
        assert_eq!(
            err,
            SelectError::NoProviderAvailable {
                category: Category::Input
            }
        );
    }

    #[test]
    fn failing_fallback_still_reports_no_provider() {
        let candidates = [c("alpha", fail_unavailable)];
        let fallback = c("dummy", fail_malformed);
        let err = select_first(Category::Clipboard, &candidates, None, Some(&fallback))
            .unwrap_err();
        assert_eq!(
            err,
            SelectError::NoProviderAvailable {
                category: Category::Clipboard
            }
        );
    }
}
