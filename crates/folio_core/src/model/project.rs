//! Project domain model.
//!
//! # Responsibility
//! - Define the project record shared by listing, filter and detail views.
//! - Turn free-form date strings into a comparable sort key.
//!
//! # Invariants
//! - `slug` is non-empty once a record leaves the repository layer.
//! - Tags keep their authored casing; comparisons are case-insensitive.
//! - `dates.start`/`dates.end` keep their authored text for display.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

const OPEN_ENDED_MARKERS: &[&str] = &["present", "current", "ongoing", "now"];

/// Kind of work a project represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Web,
    Fullstack,
    Data,
    Ml,
    Research,
    Devops,
}

impl ProjectType {
    /// Human-facing label used on badges and filter chips.
    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web App",
            Self::Fullstack => "Full Stack",
            Self::Data => "Data",
            Self::Ml => "ML/AI",
            Self::Research => "Research",
            Self::Devops => "DevOps",
        }
    }

    /// Wire name as written in front matter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Fullstack => "fullstack",
            Self::Data => "data",
            Self::Ml => "ml",
            Self::Research => "research",
            Self::Devops => "devops",
        }
    }

    /// Parses a wire name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        all_types()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
    }
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role the author played on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Frontend,
    Backend,
    Data,
    Ml,
    Infra,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Data => "Data",
            Self::Ml => "ML",
            Self::Infra => "Infrastructure",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Data => "data",
            Self::Ml => "ml",
            Self::Infra => "infra",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        all_roles()
            .iter()
            .copied()
            .find(|role| role.as_str() == normalized)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Running in production.
    Live,
    /// Demo deployment only.
    Demo,
    /// Source or deployment not public.
    Private,
    /// No longer maintained.
    Archived,
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Success,
    Accent,
    Warning,
    Muted,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Demo => "demo",
            Self::Private => "private",
            Self::Archived => "archived",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Live => BadgeTone::Success,
            Self::Demo => BadgeTone::Accent,
            Self::Private => BadgeTone::Warning,
            Self::Archived => BadgeTone::Muted,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External links shown on cards and the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

/// Authored start/end date text.
///
/// Values are kept verbatim; YAML scalars such as `2023` are read as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(deserialize_with = "scalar_as_string")]
    pub start: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Sort key of the end date.
    pub fn end_stamp(&self) -> DateStamp {
        DateStamp::parse(&self.end)
    }
}

/// Comparable form of an authored date.
///
/// Ordering: unparseable < concrete dates (chronological) < open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateStamp {
    Unparseable,
    Date(NaiveDate),
    OpenEnded,
}

impl DateStamp {
    /// Parses `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or an open-ended marker.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if OPEN_ENDED_MARKERS.contains(&lowered.as_str()) {
            return Self::OpenEnded;
        }

        let parts = trimmed.split('-').collect::<Vec<_>>();
        if parts.is_empty() || parts.len() > 3 {
            return Self::Unparseable;
        }
        let Ok(year) = parts[0].parse::<i32>() else {
            return Self::Unparseable;
        };
        let month = match parts.get(1).map(|raw| raw.parse::<u32>()) {
            None => 1,
            Some(Ok(value)) => value,
            Some(Err(_)) => return Self::Unparseable,
        };
        let day = match parts.get(2).map(|raw| raw.parse::<u32>()) {
            None => 1,
            Some(Ok(value)) => value,
            Some(Err(_)) => return Self::Unparseable,
        };

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::Date)
            .unwrap_or(Self::Unparseable)
    }

    pub fn is_parseable(self) -> bool {
        !matches!(self, Self::Unparseable)
    }
}

/// Single metric value; front matter allows numbers or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Optional headline numbers for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
}

impl ProjectMetrics {
    pub fn is_empty(&self) -> bool {
        self.users.is_none()
            && self.latency.is_none()
            && self.accuracy.is_none()
            && self.revenue.is_none()
    }
}

/// Screenshot paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectScreens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<String>,
}

/// Structured header of one project file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFrontmatter {
    pub title: String,
    /// Empty when the header omits it; the repository fills in the file stem.
    #[serde(default)]
    pub slug: String,
    /// Serialized as `type` to match the authored key.
    #[serde(rename = "type")]
    pub kind: ProjectType,
    #[serde(default)]
    pub roles: Vec<Role>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    pub dates: DateRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ProjectMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screens: Option<ProjectScreens>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Project record: decoded header plus free-text body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub meta: ProjectFrontmatter,
    /// Markdown body following the header.
    pub content: String,
}

impl Project {
    pub fn new(meta: ProjectFrontmatter, content: impl Into<String>) -> Self {
        Self {
            meta,
            content: content.into(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.meta.slug
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.meta.roles.contains(&role)
    }

    /// Case-insensitive exact tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = normalize_tag(tag);
        self.meta
            .tags
            .iter()
            .any(|candidate| normalize_tag(candidate) == needle)
    }

    /// Hero image path, when one is declared.
    pub fn hero_image(&self) -> Option<&str> {
        self.meta
            .screens
            .as_ref()
            .and_then(|screens| screens.hero.as_deref())
    }
}

const ALL_TYPES: &[ProjectType] = &[
    ProjectType::Web,
    ProjectType::Fullstack,
    ProjectType::Data,
    ProjectType::Ml,
    ProjectType::Research,
    ProjectType::Devops,
];

const ALL_ROLES: &[Role] = &[
    Role::Frontend,
    Role::Backend,
    Role::Data,
    Role::Ml,
    Role::Infra,
];

/// Every project type in display order.
/// Comparison form of a tag: lowercased, otherwise kept as authored.
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
}

pub fn all_types() -> &'static [ProjectType] {
    ALL_TYPES
}

/// Every role in display order.
pub fn all_roles() -> &'static [Role] {
    ALL_ROLES
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Decimal(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(value) => value,
        Scalar::Integer(value) => value.to_string(),
        Scalar::Decimal(value) => value.to_string(),
    })
}
