//! Block directives and inline plugin macros.
//!
//! PukiWiki plugins come in two flavours: block plugins (`#name(args)` on a
//! line of their own) and inline plugins (`&name(args){body};`). Only the
//! handful that appear in real pages are handled; the rest pass through
//! untouched.
//!
//! | Source                  | Output                                        |
//! |-------------------------|-----------------------------------------------|
//! | `#author(...)` line     | removed, newline included                     |
//! | `#freeze[(...)]` line   | removed, newline included                     |
//! | `#recent(N)`            | a single newline                              |
//! | `&new{text};`           | `text`                                        |
//! | `&counter(name)`        | `<!-- counter name -->`                       |
//! | `&online`               | `<!-- online users -->`                       |
//! | `&br;`                  | `<br />`                                      |
//! | `&size(N){text};`       | `<span style="font-size:Npx;">text</span>`    |
//! | `&color(c){text};`      | `<span style="color:c;">text</span>`          |
//!
//! The trailing `;` of the brace forms is optional and never emitted.

use super::LINE_BREAK;
use once_cell::sync::Lazy;
use regex::Regex;

static AUTHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*#author\([^\n]*\)\s*(\r?\n)?").unwrap());
static FREEZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*#freeze(?:\([^\n)]*\))?\s*(\r?\n)?").unwrap());
static RECENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#recent\(([0-9]+)\)\s*\n?").unwrap());
static NEW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&new\{([^}]*)\}(?:[ \t]*;)?").unwrap());
static COUNTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&counter\(([^)]+)\)").unwrap());
static ONLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&online").unwrap());
static BR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&br;").unwrap());
static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&size\(([0-9]+)\)\{([^}]*)\}(?:[ \t]*;)?").unwrap());
static COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&color\(([^)]+)\)\{([^}]*)\}(?:[ \t]*;)?").unwrap());

/// Drops `#author(...)` and `#freeze` lines entirely.
pub fn strip_block_directives(content: &str) -> String {
    let content = AUTHOR_RE.replace_all(content, "");
    FREEZE_RE.replace_all(&content, "").into_owned()
}

/// Replaces a `#recent(N)` block, and the blank run after it, with one newline.
pub fn collapse_recent(content: &str) -> String {
    RECENT_RE.replace_all(content, "\n").into_owned()
}

/// Unwraps `&new{timestamp};` into the bare timestamp.
pub fn expand_timestamps(content: &str) -> String {
    NEW_RE.replace_all(content, "${1}").into_owned()
}

/// Turns access counters and online markers into HTML comments.
pub fn expand_counters(content: &str) -> String {
    let content = COUNTER_RE.replace_all(content, "<!-- counter ${1} -->");
    ONLINE_RE
        .replace_all(&content, "<!-- online users -->")
        .into_owned()
}

/// Expands `&br;`, `&size(..){..}` and `&color(..){..}`.
pub fn expand_inline_styles(content: &str) -> String {
    let content = BR_RE.replace_all(content, LINE_BREAK);
    let content = SIZE_RE.replace_all(
        &content,
        r#"<span style="font-size:${1}px;">${2}</span>"#,
    );
    COLOR_RE
        .replace_all(&content, r#"<span style="color:${1};">${2}</span>"#)
        .into_owned()
}
