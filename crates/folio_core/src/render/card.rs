//! Project card projection.
//!
//! Cards show at most two highlights and four stack entries; the number of
//! hidden stack entries is reported as `stack_overflow`.

use crate::model::project::{BadgeTone, DateRange, Project, ProjectStatus};
use serde::Serialize;

const CARD_HIGHLIGHT_LIMIT: usize = 2;
const CARD_STACK_LIMIT: usize = 4;

/// View model for one listing card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub slug: String,
    pub href: String,
    pub title: String,
    pub description: String,
    pub type_label: &'static str,
    pub status: ProjectStatus,
    pub status_tone: BadgeTone,
    pub highlights: Vec<String>,
    pub stack: Vec<String>,
    pub stack_overflow: usize,
    pub github: Option<String>,
    pub live: Option<String>,
    pub date_label: String,
    /// `screens.hero`, when declared.
    pub cover_image: Option<String>,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        let meta = &project.meta;
        Self {
            slug: meta.slug.clone(),
            href: project_href(&meta.slug),
            title: meta.title.clone(),
            description: meta.description.clone(),
            type_label: meta.kind.label(),
            status: meta.status,
            status_tone: meta.status.tone(),
            highlights: meta
                .highlights
                .iter()
                .take(CARD_HIGHLIGHT_LIMIT)
                .cloned()
                .collect(),
            stack: meta.stack.iter().take(CARD_STACK_LIMIT).cloned().collect(),
            stack_overflow: meta.stack.len().saturating_sub(CARD_STACK_LIMIT),
            github: meta.links.github.clone(),
            live: meta.links.live.clone(),
            date_label: date_range_label(&meta.dates),
            cover_image: project.hero_image().map(str::to_string),
        }
    }
}

/// Detail page route for a slug.
pub fn project_href(slug: &str) -> String {
    format!("/projects/{slug}")
}

/// `start — end` label; collapses to one value when both are equal.
pub fn date_range_label(dates: &DateRange) -> String {
    let start = dates.start.trim();
    let end = dates.end.trim();
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        _ if start == end => start.to_string(),
        _ => format!("{start} \u{2014} {end}"),
    }
}
