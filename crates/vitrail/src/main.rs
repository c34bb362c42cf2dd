// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vitrail provider tooling.
//!
//! Binary entry point: inspect the provider registry, run environment
//! diagnostics, and drive the clipboard from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vitrail_core::types::Platform;
use vitrail_registry::Registry;

mod clip;
mod doctor;
mod providers;

/// Vitrail provider tooling.
#[derive(Parser, Debug)]
#[command(name = "vitrail", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered providers, per category or for one category.
    Providers {
        /// Restrict the listing to a single category key, e.g. `clipboard`.
        #[arg(long)]
        category: Option<String>,
    },
    /// Run diagnostic checks against the provider environment.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Copy text to the system clipboard.
    Copy {
        /// Text to place on the clipboard.
        text: String,
    },
    /// Print the current clipboard text.
    Paste,
}

fn main() {
    let cli = Cli::parse();

    let config = match vitrail_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            vitrail_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let registry = match Registry::for_platform(Platform::current()) {
        Ok(registry) => registry,
        Err(err) => {
            // A malformed registry table is a build defect, not an
            // environment problem.
            eprintln!("vitrail: invalid provider registry: {err}");
            std::process::exit(1);
        }
    };

    let outcome = match cli.command {
        Some(Commands::Providers { category }) => {
            providers::run(&registry, category.as_deref())
        }
        Some(Commands::Doctor { plain }) => {
            doctor::run(&config, &registry, plain);
            Ok(())
        }
        Some(Commands::Copy { text }) => clip::copy(&config, &registry, &text),
        Some(Commands::Paste) => clip::paste(&config, &registry),
        None => {
            println!("vitrail: use --help for available commands");
            Ok(())
        }
    };

    if let Err(message) = outcome {
        eprintln!("vitrail: {message}");
        std::process::exit(1);
    }
}

/// Set up the global tracing subscriber from the configured level.
///
/// `RUST_LOG` still wins when set, so a one-off debugging run does not
/// require editing configuration.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
