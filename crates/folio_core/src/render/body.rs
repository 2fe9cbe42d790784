//! Project body rendering.
//!
//! # Responsibility
//! - Render the line-oriented markdown subset used by project bodies.
//!
//! # Invariants
//! - Rendered HTML never contains unescaped author text.
//! - Blank lines produce no output.
//! - Lines are classified as authored; only the blank check ignores whitespace.

/// Renders a project body into HTML fragments.
///
/// Rules, applied per line in this order:
/// - `## heading` -> `<h2>`
/// - a line starting and ending with `**` -> emphasized paragraph holding the
///   text between the markers (empty when the markers overlap)
/// - `- item` -> `<li>`
/// - other non-blank line -> `<p>`
pub fn render_body_html(content: &str) -> String {
    let mut html = String::with_capacity(content.len() * 2);
    for line in content.lines() {
        if let Some(heading) = line.strip_prefix("## ") {
            push_element(&mut html, "<h2>", heading, "</h2>");
        } else if let Some(strong) = strong_text(line) {
            push_element(&mut html, "<p class=\"strong\">", strong, "</p>");
        } else if let Some(item) = line.strip_prefix("- ") {
            push_element(&mut html, "<li>", item, "</li>");
        } else if !line.trim().is_empty() {
            push_element(&mut html, "<p>", line, "</p>");
        }
    }
    html
}

fn push_element(html: &mut String, open: &str, text: &str, close: &str) {
    html.push_str(open);
    html.push_str(&escape_html(text));
    html.push_str(close);
}

fn strong_text(line: &str) -> Option<&str> {
    if !(line.starts_with("**") && line.ends_with("**")) {
        return None;
    }
    // `**` and `***` share their markers.
    Some(line.get(2..line.len() - 2).unwrap_or(""))
}

/// Escapes text for inclusion in HTML element content or attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
