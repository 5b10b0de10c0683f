//! `*` headings → `#` headings.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\*+)\s*(.+)$").unwrap());
static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?\[#[^\]]+\]").unwrap());

/// Rewrites every `*`-prefixed line as a Markdown heading.
///
/// The number of stars is the heading level and is not clamped. PukiWiki
/// appends generated anchors such as `[#l01bc1e0]`; those are dropped.
pub fn convert_headings(content: &str) -> String {
    HEADING_RE
        .replace_all(content, |caps: &Captures| {
            let level = caps[1].len();
            let text = ANCHOR_RE.replace_all(&caps[2], "");
            format!("{} {}", "#".repeat(level), text.trim())
        })
        .into_owned()
}
