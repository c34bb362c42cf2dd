// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability categories and the process-wide platform identifier.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A capability domain that needs a concrete backend at runtime.
///
/// The set is closed and known at build time. String keys (CLI arguments,
/// config sections) parse into this enum via `FromStr`; an unrecognized
/// key is a caller bug and surfaces as
/// [`RegistryError::UnknownCategory`](crate::error::RegistryError).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Window,
    Clipboard,
    Input,
    Text,
    Audio,
    Video,
    Camera,
    Spelling,
}

impl Category {
    /// All categories, in the stable order used by registry accessors.
    pub const ALL: [Category; 8] = [
        Category::Window,
        Category::Clipboard,
        Category::Input,
        Category::Text,
        Category::Audio,
        Category::Video,
        Category::Camera,
        Category::Spelling,
    ];

    /// The module-identifier prefix every provider entry in this category
    /// must carry, e.g. `"clipboard_"` for `Category::Clipboard`.
    pub fn module_prefix(&self) -> &'static str {
        match self {
            Category::Window => "window_",
            Category::Clipboard => "clipboard_",
            Category::Input => "input_",
            Category::Text => "text_",
            Category::Audio => "audio_",
            Category::Video => "video_",
            Category::Camera => "camera_",
            Category::Spelling => "spelling_",
        }
    }
}

/// The platform the process is running on.
///
/// Used once at startup to pick which per-category candidate list variant
/// is registered. Deliberately coarser than `target_os`: everything that
/// is not one of the four platforms with dedicated backends is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Android,
    Other,
}

impl Platform {
    /// Detect the current platform from the compile target.
    pub fn current() -> Platform {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "android") {
            // android must be checked before linux: android is linux-family.
            Platform::Android
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}
