//! Project listing use-case service.
//!
//! # Responsibility
//! - Provide the sorted listing and its featured/type/role/tag projections.
//! - Derive the tag, type and role vocabularies shown by the filter panel.
//!
//! # Invariants
//! - Listing order: featured first, then end date descending, then slug.
//! - Unparseable end dates sort after parseable ones in the same group.
//! - Tag vocabulary is lowercased, deduplicated and sorted.

use crate::model::project::{all_roles, all_types, normalize_tag, Project, ProjectType, Role};
use crate::repo::project_repo::{ProjectRepository, RepoError};
use log::info;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for project use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// No content file matches the slug.
    ProjectNotFound(String),
    /// Content read failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(slug) => write!(f, "project not found: {slug}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::ProjectNotFound(_) => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Everything the projects page needs in one read.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCatalog {
    /// Sorted listing.
    pub projects: Vec<Project>,
    pub tags: Vec<String>,
    pub types: Vec<ProjectType>,
    pub roles: Vec<Role>,
}

/// Project service facade over repository implementations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Full listing in display order.
    pub fn all_projects(&self) -> ServiceResult<Vec<Project>> {
        let mut projects = self.repo.list_projects()?;
        sort_projects(&mut projects);
        info!(
            "event=projects_list module=service status=ok count={}",
            projects.len()
        );
        Ok(projects)
    }

    pub fn featured_projects(&self) -> ServiceResult<Vec<Project>> {
        self.select(|project| project.meta.featured)
    }

    pub fn projects_by_type(&self, kind: ProjectType) -> ServiceResult<Vec<Project>> {
        self.select(|project| project.meta.kind == kind)
    }

    pub fn projects_by_role(&self, role: Role) -> ServiceResult<Vec<Project>> {
        self.select(|project| project.has_role(role))
    }

    /// Projects carrying `tag`, compared case-insensitively.
    pub fn projects_by_tag(&self, tag: &str) -> ServiceResult<Vec<Project>> {
        self.select(|project| project.has_tag(tag))
    }

    /// Gets one project by slug.
    ///
    /// # Errors
    /// - Returns `ProjectNotFound` when no content file matches.
    pub fn get_project(&self, slug: &str) -> ServiceResult<Project> {
        self.repo
            .get_project(slug)?
            .ok_or_else(|| ServiceError::ProjectNotFound(slug.to_string()))
    }

    pub fn all_tags(&self) -> ServiceResult<Vec<String>> {
        Ok(collect_tags(&self.repo.list_projects()?))
    }

    pub fn all_types(&self) -> &'static [ProjectType] {
        all_types()
    }

    pub fn all_roles(&self) -> &'static [Role] {
        all_roles()
    }

    /// Listing plus filter vocabularies from a single directory scan.
    pub fn catalog(&self) -> ServiceResult<ProjectCatalog> {
        let projects = self.all_projects()?;
        let tags = collect_tags(&projects);
        Ok(ProjectCatalog {
            projects,
            tags,
            types: all_types().to_vec(),
            roles: all_roles().to_vec(),
        })
    }

    fn select(&self, keep: impl Fn(&Project) -> bool) -> ServiceResult<Vec<Project>> {
        Ok(self
            .all_projects()?
            .into_iter()
            .filter(|project| keep(project))
            .collect())
    }
}

/// Sorts projects into display order in place.
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(compare_projects);
}

/// Display-order comparator: featured, end date descending, slug ascending.
pub fn compare_projects(a: &Project, b: &Project) -> Ordering {
    b.meta
        .featured
        .cmp(&a.meta.featured)
        .then_with(|| b.meta.dates.end_stamp().cmp(&a.meta.dates.end_stamp()))
        .then_with(|| a.meta.slug.cmp(&b.meta.slug))
}

/// Lowercased, deduplicated, sorted tag vocabulary.
pub fn collect_tags(projects: &[Project]) -> Vec<String> {
    let mut tags = BTreeSet::new();
    for project in projects {
        for tag in &project.meta.tags {
            let normalized = normalize_tag(tag);
            if !normalized.is_empty() {
                tags.insert(normalized);
            }
        }
    }
    tags.into_iter().collect()
}
