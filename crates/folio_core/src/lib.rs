//! Core content logic for the folio portfolio.
//! This crate is the single source of truth for project records, listing
//! order and filter semantics.

pub mod content;
pub mod filter;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;

pub use content::config::{ContentConfig, CONTENT_DIR_ENV, DEFAULT_CONTENT_DIR};
pub use content::front_matter::{parse_project, split_front_matter, FrontMatterError};
pub use filter::project_filter::{
    filter_projects, filter_with_outcome, FilterOutcome, ProjectFilter,
};
pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget,
};
pub use model::project::{
    all_roles, all_types, normalize_tag, BadgeTone, DateRange, DateStamp, MetricValue, Project,
    ProjectFrontmatter, ProjectLinks, ProjectMetrics, ProjectScreens, ProjectStatus, ProjectType,
    Role,
};
pub use render::body::{escape_html, render_body_html};
pub use render::card::{date_range_label, project_href, ProjectCard};
pub use repo::project_repo::{FsProjectRepository, ProjectRepository, RepoError, RepoResult};
pub use service::project_service::{
    collect_tags, compare_projects, sort_projects, ProjectCatalog, ProjectService, ServiceError,
    ServiceResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
