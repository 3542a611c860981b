//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# readme-lint configuration

# Severity that causes a failing exit code: "error", "warning", or "info"
fail_on = "error"

# Rule ids to suppress entirely
ignore = []

# Sections the required-sections rule checks for
required_sections = ["description", "installation", "changelog"]

# Tolerate a literal "trunk" stable tag (downgrades the error to a warning)
allow_trunk = false

# Path to the main plugin file, for name/license consistency checks
# plugin_file = "my-plugin.php"

# Pin the reference WordPress version instead of looking it up
# wp_version = "6.4"

# Per-rule toggles; non-default rules are opted in here

# [rules.license]
# enabled = true

# [rules.tested-up-to]
# enabled = true

# [rules.file-size]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("readme-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created readme-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit readme-lint.toml to configure rules");
    println!("  2. Run: readme-lint check");

    Ok(())
}
