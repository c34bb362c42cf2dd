// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so unrecognized keys
//! are rejected at startup with an actionable diagnostic instead of
//! being silently ignored.

use serde::{Deserialize, Deserializer, Serialize};

use vitrail_core::types::Category;

/// Top-level Vitrail configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with `VITRAIL_*`
/// environment variable overrides. Everything is optional and defaults
/// to "use the registry's priority order".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VitrailConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Per-category provider allow-lists.
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Log level filter (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Optional per-category provider allow-lists.
///
/// When a list is present for a category, provider selection is
/// restricted to exactly those short names, tried in list order -- the
/// list both narrows and reorders the default priority. An absent list
/// means "use the platform default order".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub window: Option<ProviderList>,
    #[serde(default)]
    pub clipboard: Option<ProviderList>,
    #[serde(default)]
    pub input: Option<ProviderList>,
    #[serde(default)]
    pub text: Option<ProviderList>,
    #[serde(default)]
    pub audio: Option<ProviderList>,
    #[serde(default)]
    pub video: Option<ProviderList>,
    #[serde(default)]
    pub camera: Option<ProviderList>,
    #[serde(default)]
    pub spelling: Option<ProviderList>,
}

impl ProvidersConfig {
    /// The allow-list configured for a category, if any.
    pub fn allowlist(&self, category: Category) -> Option<&[String]> {
        let list = match category {
            Category::Window => &self.window,
            Category::Clipboard => &self.clipboard,
            Category::Input => &self.input,
            Category::Text => &self.text,
            Category::Audio => &self.audio,
            Category::Video => &self.video,
            Category::Camera => &self.camera,
            Category::Spelling => &self.spelling,
        };
        list.as_ref().map(|l| l.0.as_slice())
    }
}

/// An ordered list of provider short names.
///
/// Deserializes from either a TOML array (`clipboard = ["xclip"]`) or a
/// comma-separated string (`clipboard = "xclip,dummy"`). The string form
/// exists because environment variables arrive as plain strings:
/// `VITRAIL_PROVIDERS_CLIPBOARD=xclip,dummy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderList(pub Vec<String>);

impl<'de> Deserialize<'de> for ProviderList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            List(Vec<String>),
            Csv(String),
        }

        let names = match Raw::deserialize(deserializer)? {
            Raw::List(names) => names,
            Raw::Csv(csv) => csv
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect(),
        };
        Ok(ProviderList(names))
    }
}
