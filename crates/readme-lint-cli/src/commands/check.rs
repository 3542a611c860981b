//! Check command implementation.

use anyhow::{Context, Result};
use readme_lint_core::policy::{self, Outcome};
use readme_lint_core::{Config, Linter};
use readme_lint_rules::registry;
use std::path::Path;

use crate::OutputFormat;

/// Exit code for a document that cannot be located or read at all.
const USAGE_ERROR: i32 = 2;

/// Runs the check command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    path: &Path,
    format: Option<OutputFormat>,
    fail_on: Option<String>,
    rules_filter: Option<String>,
    output: Option<&Path>,
    quiet: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let project_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let config = match crate::config_resolver::locate(project_dir, config_path) {
        None => Config::default(),
        Some(found) => {
            if found.from_user_dir() {
                tracing::info!("Using global config: {}", found.path().display());
            }
            Config::from_file(found.path())
                .with_context(|| format!("Failed to load config: {}", found.path().display()))?
        }
    };

    // A missing or unreadable document is a usage error; the engine is
    // never invoked.
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Readme file not found or unreadable: {} ({})", path.display(), e);
            std::process::exit(USAGE_ERROR);
        }
    };

    let rules = if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        registry::rules_named(&names, &config)
    } else {
        registry::default_rules(&config)
    };

    let linter = Linter::builder().rules(rules).build();
    tracing::debug!(
        "Checking {} with {} rules",
        path.display(),
        linter.rule_count()
    );

    let diagnostics = linter.lint(&content, &path.display().to_string());
    let diagnostics = policy::filter_ignored(diagnostics, &config.ignored_rule_ids());

    let format = format.unwrap_or_else(detect_format);
    let report = super::output::render(&diagnostics, format);

    match output {
        Some(output_path) => {
            std::fs::write(output_path, &report)
                .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
            if !quiet {
                println!("Output written to: {}", output_path.display());
            }
        }
        None => {
            if !report.is_empty() {
                println!("{report}");
            }
        }
    }

    if !quiet {
        super::output::print_summary(&diagnostics);
    }

    let fail_threshold = fail_on.as_deref().unwrap_or_else(|| config.fail_threshold());
    if policy::decide(&diagnostics, fail_threshold) == Outcome::Fail {
        std::process::exit(1);
    }

    Ok(())
}

/// Annotations in GitHub Actions, text everywhere else.
fn detect_format() -> OutputFormat {
    if std::env::var("GITHUB_ACTIONS").as_deref() == Ok("true") {
        OutputFormat::Annotations
    } else {
        OutputFormat::Text
    }
}
