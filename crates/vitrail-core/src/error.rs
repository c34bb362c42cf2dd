// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the provider registry and capability layers.
//!
//! The split mirrors the propagation policy: [`ResolveError`] is routine
//! and fully contained inside the selector, [`RegistryError`] signals a
//! caller bug and is loud, [`SelectError`] is the terminal
//! nothing-worked case that is fatal for a mandatory category.

use thiserror::Error;

use crate::types::Category;

/// Errors raised by registry construction and accessors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A string category key did not name a known category. This is a
    /// programming error or a config typo, never a runtime degradation.
    #[error("unknown provider category `{key}`")]
    UnknownCategory { key: String },

    /// A category was registered with an empty candidate list.
    #[error("category `{category}` has no providers registered")]
    EmptyCategory { category: Category },

    /// A provider entry violated a well-formedness invariant
    /// (empty field, bad module prefix, uppercase name).
    #[error("invalid provider entry `{category}/{name}`: {reason}")]
    InvalidEntry {
        category: Category,
        name: String,
        reason: String,
    },

    /// Two entries in the same category share a short name.
    #[error("duplicate provider name `{name}` in category `{category}`")]
    DuplicateName { category: Category, name: String },

    /// Two entries in the same category share a module identifier.
    #[error("duplicate module id `{module_id}` in category `{category}`")]
    DuplicateModule {
        category: Category,
        module_id: String,
    },
}

/// Outcome of a failed provider construction attempt.
///
/// `Unavailable` is the expected, routine case (a Linux-only helper on
/// Windows, a missing native binary) and is logged at warn level at most.
/// `Malformed` means the provider is present but broken -- unexpected, and
/// logged loudly -- but selection still moves on to the next candidate.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The backend's native dependency is missing on this system.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// The backend is present but failed to initialize correctly.
    #[error("malformed: {0}")]
    Malformed(String),
}

/// Errors raised by provider selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// Every candidate failed and no fallback was registered. Fatal for
    /// a mandatory category: downstream code assumes a provider exists.
    #[error("no provider available for category `{category}`")]
    NoProviderAvailable { category: Category },
}

/// Errors raised by clipboard backends.
///
/// Absence of clipboard content is *not* an error -- backends report it
/// as `Ok(None)` from `get` and the capability layer turns it into an
/// empty string.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// A backend operation failed (helper process died, pipe error, ...).
    #[error("clipboard backend `{backend}`: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}
