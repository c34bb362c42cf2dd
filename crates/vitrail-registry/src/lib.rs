// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider registry and selection for the Vitrail toolkit.
//!
//! For each capability category the registry holds a platform-dependent,
//! priority-ordered list of provider entries. Category bootstrap code
//! pairs those entries with factory functions and asks the selector for
//! the first candidate that constructs successfully, falling back to a
//! no-op provider where one is registered.
//!
//! The registry is built once at startup from [`Platform`] and is
//! immutable afterwards; accessors hand out copies, never the live
//! structure.
//!
//! [`Platform`]: vitrail_core::Platform

pub mod entry;
pub mod registry;
pub mod selector;

pub use entry::{Candidate, ProviderEntry, Selected};
pub use registry::Registry;
pub use selector::{select_all, select_first};
