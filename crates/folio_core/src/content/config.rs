//! Content root resolution.
//!
//! # Invariants
//! - Resolution order: explicit path, then `FOLIO_CONTENT_DIR`, then
//!   `<cwd>/content/projects`.
//! - Blank values are treated as unset at every step.

use std::path::{Path, PathBuf};

/// Environment variable overriding the project content directory.
pub const CONTENT_DIR_ENV: &str = "FOLIO_CONTENT_DIR";
/// Default content directory relative to the working directory.
pub const DEFAULT_CONTENT_DIR: &str = "content/projects";

/// Where project files are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    pub content_dir: PathBuf,
}

impl ContentConfig {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// Resolves the content directory from an optional explicit value and
    /// the process environment.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let from_env = std::env::var(CONTENT_DIR_ENV).ok();
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve_with(explicit, from_env.as_deref(), &cwd)
    }

    /// Pure resolution used by [`ContentConfig::resolve`].
    pub fn resolve_with(explicit: Option<&Path>, from_env: Option<&str>, cwd: &Path) -> Self {
        if let Some(path) = explicit.filter(|path| !path.as_os_str().is_empty()) {
            return Self::new(path);
        }
        if let Some(value) = from_env.map(str::trim).filter(|value| !value.is_empty()) {
            return Self::new(value);
        }
        Self::new(cwd.join(DEFAULT_CONTENT_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentConfig, DEFAULT_CONTENT_DIR};
    use std::path::{Path, PathBuf};

    #[test]
    fn explicit_path_wins_over_environment() {
        let config = ContentConfig::resolve_with(
            Some(Path::new("/srv/projects")),
            Some("/env/projects"),
            Path::new("/work"),
        );
        assert_eq!(config.content_dir, PathBuf::from("/srv/projects"));
    }

    #[test]
    fn blank_environment_falls_back_to_cwd_default() {
        let config = ContentConfig::resolve_with(None, Some("   "), Path::new("/work"));
        assert_eq!(
            config.content_dir,
            Path::new("/work").join(DEFAULT_CONTENT_DIR)
        );
    }

    #[test]
    fn environment_is_used_without_explicit_path() {
        let config = ContentConfig::resolve_with(None, Some("/env/projects"), Path::new("/work"));
        assert_eq!(config.content_dir, PathBuf::from("/env/projects"));
    }
}
