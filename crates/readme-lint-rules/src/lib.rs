//! # readme-lint-rules
//!
//! Built-in lint rules for readme-lint.
//!
//! Each rule is an independent check over the parsed field map and raw
//! document text, producing zero or more diagnostics.
//!
//! ## Available Rules
//!
//! | Id | Default | Description |
//! |----|---------|-------------|
//! | `plugin-name` | yes | Plugin name header present, well formed, matches plugin file |
//! | `required-fields` | yes | Mandatory header fields present |
//! | `short-description` | yes | Short description present and within length limits |
//! | `stable-tag` | yes | Stable tag is a dotted numeric version |
//! | `requires-php` | yes | Requires PHP field present and valid |
//! | `required-sections` | yes | Configured sections present |
//! | `empty-sections` | yes | Sections have meaningful content |
//! | `heading-levels` | yes | No over-deep heading markers |
//! | `file-size` | yes | Readme size within limits |
//! | `donate-link` | yes | Donate link well formed, acceptable domain |
//! | `license` | no | License present, accepted, matches plugin header |
//! | `contributors` | no | Contributor usernames valid and permitted |
//! | `tested-up-to` | no | Tested up to is a current WordPress version |
//! | `default-text` | no | No readme template boilerplate |
//! | `upgrade-notice` | no | Upgrade notices bounded in number and length |
//! | `trademark` | no | No improper trademark usage |
//!
//! ## Usage
//!
//! ```ignore
//! use readme_lint_core::{Config, Linter};
//! use readme_lint_rules::registry;
//!
//! let config = Config::default();
//! let linter = Linter::builder()
//!     .rules(registry::default_rules(&config))
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod companion;
mod contributors;
mod default_text;
mod donate_link;
mod empty_sections;
mod file_size;
mod heading_levels;
mod license;
mod pattern;
mod plugin_name;
mod required_fields;
mod required_sections;
mod requires_php;
mod short_description;
mod stable_tag;
mod tested_up_to;
mod trademark;
mod upgrade_notice;
mod wp_version;

/// Rule registry mapping rule names to constructors.
pub mod registry;

pub use contributors::Contributors;
pub use default_text::DefaultText;
pub use donate_link::DonateLink;
pub use empty_sections::EmptySections;
pub use file_size::FileSize;
pub use heading_levels::HeadingLevels;
pub use license::License;
pub use plugin_name::PluginName;
pub use registry::{default_rules, rules_named, RuleFactory, FACTORIES};
pub use required_fields::RequiredFields;
pub use required_sections::RequiredSections;
pub use requires_php::RequiresPhp;
pub use short_description::ShortDescription;
pub use stable_tag::StableTag;
pub use tested_up_to::TestedUpTo;
pub use trademark::Trademark;
pub use upgrade_notice::UpgradeNotice;
pub use wp_version::{PinnedVersion, WpOrgApi, WpVersionProvider};

/// Re-export core types for convenience.
pub use readme_lint_core::{Diagnostic, Rule, Severity};
