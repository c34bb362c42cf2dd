// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./vitrail.toml` >
//! `~/.config/vitrail/vitrail.toml` > `/etc/vitrail/vitrail.toml`, with
//! environment variable overrides via the `VITRAIL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use tracing::debug;

use crate::model::VitrailConfig;

/// Load configuration from the standard XDG hierarchy with env overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/vitrail/vitrail.toml` (system-wide)
/// 3. `~/.config/vitrail/vitrail.toml` (user XDG config)
/// 4. `./vitrail.toml` (local directory)
/// 5. `VITRAIL_*` environment variables
pub fn load_config() -> Result<VitrailConfig, figment::Error> {
    debug!("loading configuration from XDG hierarchy and VITRAIL_ environment");
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used by tests and by callers with an explicit config source.
pub fn load_config_from_str(toml_content: &str) -> Result<VitrailConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VitrailConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env overrides.
pub fn load_config_from_path(path: &Path) -> Result<VitrailConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VitrailConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading (exposed for diagnostics).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(VitrailConfig::default()))
        .merge(Toml::file("/etc/vitrail/vitrail.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("vitrail/vitrail.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("vitrail.toml"))
        .merge(env_provider())
}

/// Environment variable provider.
///
/// Uses an explicit `map()` rather than `Env::split("_")` so section
/// names survive: `VITRAIL_PROVIDERS_CLIPBOARD` must become
/// `providers.clipboard`, and `VITRAIL_LOG_LEVEL` must become
/// `log.level`, without guessing at every underscore.
fn env_provider() -> Env {
    Env::prefixed("VITRAIL_").map(|key| {
        // Figment strips the prefix but keeps the variable's original
        // case, so lowercase before matching the section names.
        let lower = key.as_str().to_ascii_lowercase();
        let mapped = if let Some(rest) = lower.strip_prefix("log_") {
            format!("log.{rest}")
        } else if let Some(rest) = lower.strip_prefix("providers_") {
            format!("providers.{rest}")
        } else {
            lower
        };
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrail_core::types::Category;

    #[test]
    fn defaults_load_without_any_file() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.log.level, "info");
        assert!(config.providers.allowlist(Category::Clipboard).is_none());
    }

    #[test]
    fn env_override_sets_provider_allowlist() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VITRAIL_PROVIDERS_CLIPBOARD", "xsel,dummy");
            jail.set_env("VITRAIL_LOG_LEVEL", "debug");
            let config: VitrailConfig = build_figment().extract()?;
            assert_eq!(
                config.providers.allowlist(Category::Clipboard),
                Some(&["xsel".to_string(), "dummy".to_string()][..])
            );
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "vitrail.toml",
                r#"
[log]
level = "warn"

[providers]
camera = ["opencv"]
"#,
            )?;
            let config: VitrailConfig = build_figment().extract()?;
            assert_eq!(config.log.level, "warn");
            assert_eq!(
                config.providers.allowlist(Category::Camera),
                Some(&["opencv".to_string()][..])
            );
            Ok(())
        });
    }

    #[test]
    fn env_overrides_local_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "vitrail.toml",
                r#"
[providers]
clipboard = ["xclip"]
"#,
            )?;
            jail.set_env("VITRAIL_PROVIDERS_CLIPBOARD", "dummy");
            let config: VitrailConfig = build_figment().extract()?;
            assert_eq!(
                config.providers.allowlist(Category::Clipboard),
                Some(&["dummy".to_string()][..])
            );
            Ok(())
        });
    }
}
