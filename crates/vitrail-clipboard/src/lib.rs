// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clipboard capability for the Vitrail toolkit.
//!
//! The exemplar provider category: platform text conventions, backend
//! adapters over the platform clipboard tools, an in-process no-op
//! fallback, and the bootstrap that runs registry-driven selection and
//! returns a ready [`Clipboard`] handle.

pub mod backends;
pub mod bootstrap;
pub mod clipboard;
pub mod convention;
pub mod cut_buffer;

pub use bootstrap::{init_clipboard, init_cut_buffer};
pub use clipboard::Clipboard;
pub use cut_buffer::CutBuffer;
