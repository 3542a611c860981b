//! # readme-lint-core
//!
//! Core framework for linting WordPress.org plugin readme files.
//!
//! This crate provides the diagnostic pipeline that rule crates and the
//! CLI build on:
//!
//! - [`Diagnostic`] and [`Severity`] for representing findings
//! - [`Rule`] trait for independent, stateless checks
//! - [`Linter`] for running the active rule set and merging results
//!   deterministically
//! - [`policy`] for suppression filtering and the pass/fail decision
//! - [`reporter`] for rendering diagnostics as text, CI annotations,
//!   JSON, or SARIF
//!
//! ## Example
//!
//! ```ignore
//! use readme_lint_core::{Linter, policy, reporter::{Reporter, TextReporter}};
//!
//! let linter = Linter::builder().rule(MyRule::new()).build();
//! let diagnostics = linter.lint(&content, "readme.txt");
//! let diagnostics = policy::filter_ignored(diagnostics, &ignored);
//! println!("{}", TextReporter::new().render(&diagnostics));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod fields;
mod linter;
mod parser;
mod rule;
mod types;

/// Suppression filtering and exit-code decisions.
pub mod policy;

/// Report rendering in the supported output formats.
pub mod reporter;

/// Shared helpers for rule implementations.
pub mod utils;

pub use config::{Config, ConfigError, RuleConfig};
pub use fields::{FieldMap, FieldValue};
pub use linter::{Linter, LinterBuilder};
pub use parser::ReadmeParser;
pub use policy::Outcome;
pub use rule::{Rule, RuleBox};
pub use types::{severity_counts, Diagnostic, Severity};
