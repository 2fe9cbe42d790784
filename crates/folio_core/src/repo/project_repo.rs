//! Project repository contracts and filesystem implementation.
//!
//! # Responsibility
//! - Enumerate project slugs from `*.md` / `*.mdx` files.
//! - Resolve one slug to a decoded `Project`.
//!
//! # Invariants
//! - `list_slugs` is deduplicated and sorted ascending.
//! - `<slug>.mdx` takes precedence over `<slug>.md`.
//! - A returned record's slug always equals its file stem.
//! - File bytes are decoded lossily; invalid UTF-8 never fails a read.
//! - `list_projects` skips unreadable or undecodable files instead of failing
//!   the listing; only a failing directory scan is an error.

use crate::content::front_matter::{parse_project, FrontMatterError};
use crate::model::project::Project;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

const CONTENT_EXTENSIONS: &[&str] = &["mdx", "md"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for content reads.
#[derive(Debug)]
pub enum RepoError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    InvalidFrontMatter {
        path: PathBuf,
        source: FrontMatterError,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::InvalidFrontMatter { path, source } => {
                write!(f, "invalid project file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidFrontMatter { source, .. } => Some(source),
        }
    }
}

/// Repository interface for project content.
pub trait ProjectRepository {
    /// Lists known slugs, sorted and unique.
    fn list_slugs(&self) -> RepoResult<Vec<String>>;
    /// Gets one project by slug; `Ok(None)` when no file matches.
    fn get_project(&self, slug: &str) -> RepoResult<Option<Project>>;
    /// Lists every decodable project in slug order.
    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut projects = Vec::new();
        for slug in self.list_slugs()? {
            match self.get_project(&slug) {
                Ok(Some(project)) => projects.push(project),
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        "event=project_skip module=repo status=error slug={} error={}",
                        slug, err
                    );
                }
            }
        }
        Ok(projects)
    }
}

/// Directory-backed project repository.
#[derive(Debug, Clone)]
pub struct FsProjectRepository {
    root: PathBuf,
}

impl FsProjectRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve_path(&self, slug: &str) -> Option<PathBuf> {
        if !is_safe_slug(slug) {
            return None;
        }
        CONTENT_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{slug}.{ext}")))
            .find(|path| path.is_file())
    }
}

impl ProjectRepository for FsProjectRepository {
    fn list_slugs(&self) -> RepoResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "event=content_root_missing module=repo status=ok root={}",
                    self.root.display()
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(RepoError::Io {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut slugs = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|source| RepoError::Io {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(slug) = slug_from_path(&path) {
                slugs.insert(slug);
            }
        }
        Ok(slugs.into_iter().collect())
    }

    fn get_project(&self, slug: &str) -> RepoResult<Option<Project>> {
        let Some(path) = self.resolve_path(slug) else {
            return Ok(None);
        };

        let bytes = std::fs::read(&path).map_err(|source| RepoError::Io {
            path: path.clone(),
            source,
        })?;
        // Invalid UTF-8 sequences become U+FFFD instead of failing the read.
        let text = String::from_utf8_lossy(&bytes);
        let mut project =
            parse_project(slug, &text).map_err(|source| RepoError::InvalidFrontMatter {
                path: path.clone(),
                source,
            })?;

        if project.meta.slug != slug {
            warn!(
                "event=slug_mismatch module=repo status=ok file_slug={} declared_slug={}",
                slug, project.meta.slug
            );
            project.meta.slug = slug.to_string();
        }
        Ok(Some(project))
    }
}

/// Returns the slug for a content file path, or `None` for other files.
pub fn slug_from_path(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !CONTENT_EXTENSIONS.contains(&ext) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && !slug.contains("..")
        && !slug.contains(['/', '\\'])
}
