// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Vitrail provider subsystem.
//!
//! Provides TOML parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, `VITRAIL_*` environment overrides, and
//! diagnostic error rendering with typo suggestions.
//!
//! The interesting payload is `[providers]`: optional per-category
//! allow-lists that restrict and reorder provider selection, e.g.
//!
//! ```toml
//! [providers]
//! clipboard = ["xsel", "dummy"]
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{ProviderList, ProvidersConfig, VitrailConfig};

/// Load configuration from the XDG hierarchy and validate it.
///
/// On figment failure the error is converted into rich diagnostics with
/// typo suggestions; on success the post-deserialization validation
/// runs. Returns a valid config or the full list of problems.
pub fn load_and_validate() -> Result<VitrailConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(diagnostic::figment_to_config_errors(err, &toml_sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<VitrailConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Collect TOML source file contents for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();

    if let Ok(content) = std::fs::read_to_string("vitrail.toml") {
        let path = std::env::current_dir()
            .map(|d| d.join("vitrail.toml").display().to_string())
            .unwrap_or_else(|_| "vitrail.toml".to_string());
        sources.push((path, content));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("vitrail/vitrail.toml");
        if let Ok(content) = std::fs::read_to_string(&path) {
            sources.push((path.display().to_string(), content));
        }
    }

    let system_path = std::path::Path::new("/etc/vitrail/vitrail.toml");
    if let Ok(content) = std::fs::read_to_string(system_path) {
        sources.push((system_path.display().to_string(), content));
    }

    sources
}
