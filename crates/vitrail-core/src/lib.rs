// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Vitrail toolkit provider subsystem.
//!
//! This crate provides the capability category and platform types, the
//! error types shared across the workspace, and the backend traits that
//! concrete providers implement. The registry and selection logic live
//! in `vitrail-registry`; capability wrappers (clipboard, ...) live in
//! their own crates.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ClipboardError, RegistryError, ResolveError, SelectError};
pub use types::{Category, Platform};

pub use traits::ClipboardBackend;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_display_round_trips_through_from_str() {
        for category in Category::ALL {
            let key = category.to_string();
            let parsed = Category::from_str(&key).expect("should parse back");
            assert_eq!(category, parsed);
        }
    }

    #[test]
    fn category_keys_are_lowercase() {
        for category in Category::ALL {
            let key = category.to_string();
            assert_eq!(key, key.to_lowercase(), "category key must be lowercase");
        }
    }

    #[test]
    fn error_variants_render_context() {
        let err = RegistryError::UnknownCategory {
            key: "clipbaord".into(),
        };
        assert!(err.to_string().contains("clipbaord"));

        let err = SelectError::NoProviderAvailable {
            category: Category::Clipboard,
        };
        assert!(err.to_string().contains("clipboard"));
    }
}
