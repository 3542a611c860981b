//! List rules command implementation.

use readme_lint_rules::FACTORIES;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<20} {:<9} Description", "Id", "Default");
    println!("{}", "-".repeat(80));

    for factory in FACTORIES {
        println!(
            "{:<20} {:<9} {}",
            factory.id,
            if factory.default_enabled { "yes" } else { "no" },
            factory.description
        );
    }

    println!("\nNon-default rules are enabled with [rules.<id>] enabled = true");
    println!("in readme-lint.toml, or with --rules, e.g.:");
    println!("  readme-lint check --rules stable-tag,license");
}
