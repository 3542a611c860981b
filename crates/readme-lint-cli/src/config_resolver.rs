//! Locating the configuration file.
//!
//! An explicit `--config` path is taken as-is (a missing file surfaces as
//! a load error, not a silent fallback). Otherwise the readme's directory
//! is searched for `readme-lint.toml` then `.readme-lint.toml`, and
//! finally the per-user directory: `$README_LINT_CONFIG_DIR` if set, else
//! `~/.readme-lint/`, each holding a `config.toml`. No file anywhere
//! means built-in defaults.

use std::path::{Path, PathBuf};

/// A located configuration file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    path: PathBuf,
    origin: Origin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Flag,
    ProjectDir,
    UserDir,
}

impl ResolvedConfig {
    /// Path of the file to load.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file came from the per-user directory rather than the
    /// project or the command line.
    pub fn from_user_dir(&self) -> bool {
        self.origin == Origin::UserDir
    }
}

/// Resolves the configuration file for a run, or `None` for defaults.
pub fn locate(project_dir: &Path, flag: Option<&Path>) -> Option<ResolvedConfig> {
    locate_with_user_dir(project_dir, flag, user_config_dir())
}

fn locate_with_user_dir(
    project_dir: &Path,
    flag: Option<&Path>,
    user_dir: Option<PathBuf>,
) -> Option<ResolvedConfig> {
    if let Some(path) = flag {
        return Some(ResolvedConfig {
            path: path.to_path_buf(),
            origin: Origin::Flag,
        });
    }

    for name in ["readme-lint.toml", ".readme-lint.toml"] {
        let candidate = project_dir.join(name);
        if candidate.is_file() {
            tracing::debug!("Using project config {}", candidate.display());
            return Some(ResolvedConfig {
                path: candidate,
                origin: Origin::ProjectDir,
            });
        }
    }

    let candidate = user_dir?.join("config.toml");
    if candidate.is_file() {
        tracing::debug!("Using user config {}", candidate.display());
        return Some(ResolvedConfig {
            path: candidate,
            origin: Origin::UserDir,
        });
    }

    None
}

fn user_config_dir() -> Option<PathBuf> {
    match std::env::var_os("README_LINT_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|home| home.join(".readme-lint")),
    }
}
