// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend trait definitions for capability categories.
//!
//! Each category with a capability wrapper defines the contract its
//! concrete backends must satisfy here. Only the clipboard contract is
//! part of this subsystem; other categories (window, input, ...) define
//! their contracts next to their capability crates.

pub mod clipboard;

pub use clipboard::ClipboardBackend;
