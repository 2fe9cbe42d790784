//! Front matter splitting and decoding.
//!
//! # Responsibility
//! - Separate a `---` fenced YAML header from the markdown body.
//! - Decode the header into `ProjectFrontmatter`.
//!
//! # Invariants
//! - A header exists only when the very first line is a `---` fence.
//! - Body text after the closing fence is returned verbatim.
//! - Decoding never panics on malformed input.

use crate::model::project::{Project, ProjectFrontmatter};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FENCE: &str = "---";
const ALT_CLOSING_FENCE: &str = "...";
const BOM: char = '\u{feff}';

/// Error for header splitting and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterError {
    /// File has no leading `---` header block.
    MissingHeader,
    /// Opening fence found but no closing fence.
    UnterminatedHeader,
    /// Header is not valid YAML or misses required fields.
    InvalidYaml(String),
}

impl Display for FrontMatterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "missing front matter header"),
            Self::UnterminatedHeader => write!(f, "front matter header is not terminated"),
            Self::InvalidYaml(message) => write!(f, "invalid front matter: {message}"),
        }
    }
}

impl Error for FrontMatterError {}

/// Header/body split of one content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Raw header text between the fences, if present.
    pub header: Option<&'a str>,
    /// Markdown body.
    pub body: &'a str,
}

/// Splits `text` into an optional header and body.
///
/// Without an opening fence the whole text is the body.
///
/// # Errors
/// - Returns `UnterminatedHeader` when the opening fence has no match.
pub fn split_front_matter(text: &str) -> Result<SplitDocument<'_>, FrontMatterError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let Some((first_line, rest)) = split_first_line(text) else {
        return Ok(SplitDocument {
            header: None,
            body: text,
        });
    };
    if first_line.trim_end() != FENCE {
        return Ok(SplitDocument {
            header: None,
            body: text,
        });
    }

    let mut offset = 0;
    let mut remaining = rest;
    while let Some((line, tail)) = split_first_line(remaining) {
        let trimmed = line.trim_end();
        if trimmed == FENCE || trimmed == ALT_CLOSING_FENCE {
            return Ok(SplitDocument {
                header: Some(&rest[..offset]),
                body: tail,
            });
        }
        offset += remaining.len() - tail.len();
        remaining = tail;
    }

    Err(FrontMatterError::UnterminatedHeader)
}

/// Decodes one project file.
///
/// `slug` is stored on the record when the header does not declare one.
///
/// # Errors
/// - Returns `MissingHeader` for files without a header block.
/// - Returns `InvalidYaml` when required fields are absent or mistyped.
pub fn parse_project(slug: &str, text: &str) -> Result<Project, FrontMatterError> {
    let document = split_front_matter(text)?;
    let header = document.header.ok_or(FrontMatterError::MissingHeader)?;
    let mut meta: ProjectFrontmatter = serde_yaml::from_str(header)
        .map_err(|err| FrontMatterError::InvalidYaml(err.to_string()))?;
    if meta.slug.trim().is_empty() {
        meta.slug = slug.to_string();
    }
    Ok(Project::new(meta, document.body))
}

/// Returns `(line_without_newline, rest_after_newline)`; `None` at end of input.
fn split_first_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    match text.find('\n') {
        Some(index) => {
            let line = text[..index].strip_suffix('\r').unwrap_or(&text[..index]);
            Some((line, &text[index + 1..]))
        }
        None => Some((text, "")),
    }
}
