//! readme-lint CLI tool.
//!
//! Usage:
//! ```bash
//! readme-lint check [OPTIONS] [PATH]
//! readme-lint list-rules
//! readme-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter for WordPress.org plugin readme files
#[derive(Parser)]
#[command(name = "readme-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a readme file
    Check {
        /// Path to the readme file
        #[arg(default_value = "readme.txt")]
        path: PathBuf,

        /// Output format; auto-detected when omitted (annotations in
        /// GitHub Actions, text otherwise)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Fail on level (error, warning, info)
        #[arg(long)]
        fail_on: Option<String>,

        /// Only run specific rules (comma-separated)
        #[arg(long)]
        rules: Option<String>,

        /// Output file for the report (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Quiet mode - only write the report, no summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint reports.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// CI annotation lines.
    Annotations,
    /// JSON document.
    Json,
    /// SARIF 2.1.0 document.
    Sarif,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            fail_on,
            rules,
            output,
            quiet,
        } => commands::check::run(
            &path,
            format,
            fail_on,
            rules,
            output.as_deref(),
            quiet,
            cli.config.as_deref(),
        ),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
