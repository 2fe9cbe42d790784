//! Project list filtering.
//!
//! # Responsibility
//! - Match projects against free-text, type, role and tag criteria.
//! - Provide the filter-panel state transitions (toggle, clear, counts).
//!
//! # Invariants
//! - The result is an order-preserving subsequence of the input.
//! - Empty search text and empty criteria are inactive; search text is
//!   matched as typed, whitespace included.
//! - Combining criteria is the intersection of single-criterion results.

use crate::model::project::{normalize_tag, Project, ProjectType, Role};
use serde::{Deserialize, Serialize};

/// Active filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilter {
    /// Case-insensitive substring over title, description, tags and stack.
    #[serde(default)]
    pub search: String,
    /// Exact type match.
    #[serde(default, rename = "type")]
    pub kind: Option<ProjectType>,
    /// Role membership.
    #[serde(default)]
    pub role: Option<Role>,
    /// Every listed tag must be present.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_kind(mut self, kind: ProjectType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.toggle_tag(tag);
        self
    }

    /// Adds `tag` when absent, removes it when present (case-insensitive).
    pub fn toggle_tag(&mut self, tag: impl Into<String>) {
        let needle = normalize_tag(&tag.into());
        if needle.is_empty() {
            return;
        }
        let before = self.tags.len();
        self.tags.retain(|existing| normalize_tag(existing) != needle);
        if self.tags.len() == before {
            self.tags.push(needle);
        }
    }

    /// Resets every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.kind.is_none()
            && self.role.is_none()
            && self.tags.is_empty()
    }

    /// Number of active panel criteria; search text is not counted.
    pub fn active_count(&self) -> usize {
        usize::from(self.kind.is_some()) + usize::from(self.role.is_some()) + self.tags.len()
    }

    /// Returns whether `project` satisfies every active criterion.
    pub fn matches(&self, project: &Project) -> bool {
        let search = self.search.to_lowercase();
        if !search.is_empty() && !matches_search(project, &search) {
            return false;
        }

        if let Some(kind) = self.kind {
            if project.meta.kind != kind {
                return false;
            }
        }

        if let Some(role) = self.role {
            if !project.has_role(role) {
                return false;
            }
        }

        self.tags.iter().all(|tag| project.has_tag(tag))
    }
}

/// Counts shown next to the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub shown: usize,
    pub total: usize,
}

impl FilterOutcome {
    pub fn summary(&self) -> String {
        format!("Showing {} of {} projects", self.shown, self.total)
    }
}

/// Keeps projects matching `filter`, preserving input order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    if filter.is_empty() {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}

/// Filters and reports shown/total counts.
pub fn filter_with_outcome<'a>(
    projects: &'a [Project],
    filter: &ProjectFilter,
) -> (Vec<&'a Project>, FilterOutcome) {
    let shown = filter_projects(projects, filter);
    let outcome = FilterOutcome {
        shown: shown.len(),
        total: projects.len(),
    };
    (shown, outcome)
}

fn matches_search(project: &Project, needle: &str) -> bool {
    let meta = &project.meta;
    contains_folded(&meta.title, needle)
        || contains_folded(&meta.description, needle)
        || meta.tags.iter().any(|tag| contains_folded(tag, needle))
        || meta.stack.iter().any(|tech| contains_folded(tech, needle))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{FilterOutcome, ProjectFilter};
    use crate::model::project::{ProjectType, Role};

    #[test]
    fn toggle_tag_adds_then_removes_case_insensitively() {
        let mut filter = ProjectFilter::new();
        filter.toggle_tag("Rust");
        assert_eq!(filter.tags, vec!["rust".to_string()]);
        filter.toggle_tag("RUST");
        assert!(filter.tags.is_empty());
        filter.toggle_tag("");
        assert!(filter.tags.is_empty());
        filter.toggle_tag(" React");
        assert_eq!(filter.tags, vec![" react".to_string()]);
    }

    #[test]
    fn active_count_ignores_search_text() {
        let filter = ProjectFilter::new()
            .with_search("pipeline")
            .with_kind(ProjectType::Data)
            .with_role(Role::Backend)
            .with_tag("etl")
            .with_tag("python");
        assert_eq!(filter.active_count(), 4);
        assert!(!filter.is_empty());
    }

    #[test]
    fn clear_resets_every_criterion() {
        let mut filter = ProjectFilter::new()
            .with_search("x")
            .with_kind(ProjectType::Web)
            .with_tag("a");
        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter, ProjectFilter::default());
    }

    #[test]
    fn only_empty_search_is_inactive() {
        assert!(ProjectFilter::new().with_search("").is_empty());
        assert!(!ProjectFilter::new().with_search(" ").is_empty());
    }

    #[test]
    fn outcome_summary_matches_listing_caption() {
        let outcome = FilterOutcome { shown: 2, total: 7 };
        assert_eq!(outcome.summary(), "Showing 2 of 7 projects");
    }
}
