// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vitrail doctor` command implementation.
//!
//! Runs diagnostic checks against the provider environment: does the
//! configuration load, is the registry table well-formed, which
//! clipboard provider would selection pick, and is the cut buffer
//! available where the platform has one.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use vitrail_clipboard::init_clipboard;
use vitrail_config::VitrailConfig;
use vitrail_core::types::{Category, Platform};
use vitrail_registry::Registry;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `vitrail doctor` command.
///
/// With `--plain`, disables colored output.
pub fn run(config: &VitrailConfig, registry: &Registry, plain: bool) {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_config(),
        check_registry(registry),
        check_allowlists(config, registry),
        check_clipboard(config, registry),
    ];

    println!();
    println!("  vitrail doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let line;

        match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    let symbol = "✓".green().to_string();
                    line = format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                } else {
                    line = format!(
                        "    [OK]   {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "!".yellow().to_string();
                    line = format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.yellow()
                    );
                } else {
                    line = format!(
                        "    [WARN] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "✗".red().to_string();
                    line = format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.red()
                    );
                } else {
                    line = format!(
                        "    [FAIL] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
        }

        println!("{line}");
    }

    println!();

    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }

    println!();
}

/// Check configuration loads without errors.
fn check_config() -> CheckResult {
    let start = Instant::now();
    match vitrail_config::load_and_validate() {
        Ok(_) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Pass,
            message: "valid".to_string(),
            duration: start.elapsed(),
        },
        Err(errors) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} error(s)", errors.len()),
            duration: start.elapsed(),
        },
    }
}

/// Check the registry table is well-formed and non-trivial.
fn check_registry(registry: &Registry) -> CheckResult {
    let start = Instant::now();
    let categories = registry.categories().len();
    let entries: usize = registry
        .categories()
        .iter()
        .map(|&category| registry.entries(category).len())
        .sum();
    CheckResult {
        name: "Registry".to_string(),
        status: CheckStatus::Pass,
        message: format!(
            "{entries} providers across {categories} categories ({})",
            registry.platform()
        ),
        duration: start.elapsed(),
    }
}

/// Check configured allow-lists only name registered providers.
///
/// Selection tolerates unknown names by skipping them; the doctor warns
/// about them so typos get noticed.
fn check_allowlists(config: &VitrailConfig, registry: &Registry) -> CheckResult {
    let start = Instant::now();
    let mut unknown = Vec::new();

    for &category in registry.categories() {
        let Some(allowlist) = config.providers.allowlist(category) else {
            continue;
        };
        let registered = registry.providers(category);
        for name in allowlist {
            if !registered.contains(&name.as_str()) {
                unknown.push(format!("{category}.{name}"));
            }
        }
    }

    if unknown.is_empty() {
        CheckResult {
            name: "Allow-lists".to_string(),
            status: CheckStatus::Pass,
            message: "all configured names are registered".to_string(),
            duration: start.elapsed(),
        }
    } else {
        CheckResult {
            name: "Allow-lists".to_string(),
            status: CheckStatus::Warn,
            message: format!("unregistered: {}", unknown.join(", ")),
            duration: start.elapsed(),
        }
    }
}

/// Check clipboard selection succeeds and report which provider won.
fn check_clipboard(config: &VitrailConfig, registry: &Registry) -> CheckResult {
    let start = Instant::now();
    let allowlist = config.providers.allowlist(Category::Clipboard);
    match init_clipboard(registry, allowlist) {
        Ok(clipboard) if clipboard.is_fallback() => CheckResult {
            name: "Clipboard".to_string(),
            status: CheckStatus::Warn,
            message: no_real_provider_hint(registry.platform()),
            duration: start.elapsed(),
        },
        Ok(clipboard) => CheckResult {
            name: "Clipboard".to_string(),
            status: CheckStatus::Pass,
            message: format!("provider `{}`", clipboard.provider()),
            duration: start.elapsed(),
        },
        Err(err) => CheckResult {
            name: "Clipboard".to_string(),
            status: CheckStatus::Fail,
            message: err.to_string(),
            duration: start.elapsed(),
        },
    }
}

fn no_real_provider_hint(platform: Platform) -> String {
    match platform {
        Platform::Linux => {
            "no system clipboard tool found (install xclip or xsel)".to_string()
        }
        _ => "no system clipboard available, using in-process fallback".to_string(),
    }
}
