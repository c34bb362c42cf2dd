// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks the semantic constraints serde attributes cannot express:
//! a known log level, well-formed provider names, and no duplicates
//! within an allow-list.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::VitrailConfig;

use vitrail_core::types::Category;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects all validation errors rather than failing fast.
pub fn validate_config(config: &VitrailConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    for category in Category::ALL {
        let Some(names) = config.providers.allowlist(category) else {
            continue;
        };

        let mut seen = HashSet::new();
        for name in names {
            if name.trim().is_empty() {
                errors.push(ConfigError::Validation {
                    message: format!("providers.{category} contains an empty provider name"),
                });
                continue;
            }
            if *name != name.to_lowercase() {
                errors.push(ConfigError::Validation {
                    message: format!(
                        "providers.{category}: provider name `{name}` must be lowercase"
                    ),
                });
            }
            if !seen.insert(name.as_str()) {
                errors.push(ConfigError::Validation {
                    message: format!(
                        "providers.{category}: duplicate provider name `{name}`"
                    ),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
