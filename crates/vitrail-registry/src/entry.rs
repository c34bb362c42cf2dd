// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider entry and candidate records.
//!
//! A [`ProviderEntry`] is the registry's metadata pair (short name +
//! module identifier). A [`Candidate`] pairs that metadata with the
//! factory function that actually constructs the backend; factories are
//! plain `fn` pointers resolved at compile time -- no reflection, no
//! dynamic module lookup.

use vitrail_core::error::ResolveError;

/// A single (short-name, module-identifier) pair in the registry.
///
/// `name` is lowercase and unique within its category; `module_id`
/// starts with the category's module prefix (e.g. `clipboard_xclip`).
/// Both invariants are enforced by [`Registry::for_platform`].
///
/// [`Registry::for_platform`]: crate::registry::Registry::for_platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderEntry {
    /// Provider short name, e.g. `"xclip"`.
    pub name: &'static str,
    /// Module identifier, e.g. `"clipboard_xclip"`.
    pub module_id: &'static str,
}

impl ProviderEntry {
    pub const fn new(name: &'static str, module_id: &'static str) -> ProviderEntry {
        ProviderEntry { name, module_id }
    }
}

/// A provider entry together with its backend factory.
///
/// `construct` must fail fast when the backend's native dependency is
/// missing, and must release any resources it acquired before returning
/// an error -- the selector will immediately try the next candidate.
pub struct Candidate<T> {
    /// Provider short name, matching the registry entry.
    pub name: &'static str,
    /// Module identifier, matching the registry entry.
    pub module_id: &'static str,
    /// Factory that builds the backend or reports why it cannot.
    pub construct: fn() -> Result<T, ResolveError>,
}

impl<T> Candidate<T> {
    pub const fn new(
        name: &'static str,
        module_id: &'static str,
        construct: fn() -> Result<T, ResolveError>,
    ) -> Candidate<T> {
        Candidate {
            name,
            module_id,
            construct,
        }
    }
}

/// A successfully constructed provider, as returned by the selector.
#[derive(Debug)]
pub struct Selected<T> {
    /// Short name of the winning provider.
    pub name: &'static str,
    /// The constructed backend.
    pub backend: T,
    /// Whether this is the registered no-op fallback rather than a real
    /// candidate.
    pub is_fallback: bool,
}
