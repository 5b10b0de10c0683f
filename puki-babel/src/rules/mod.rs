//! Markup rewriting rules
//!
//! Each submodule owns one concern of the PukiWiki → Markdown rewrite and
//! exposes plain `&str -> String` functions. None of them keeps state between
//! calls; their regexes are compiled once into `Lazy` statics.
//!
//! The rules are not independent: several of them look at what an earlier
//! rule produced (table tails undo emphasis tags, list detection skips
//! converted `#` headings, ...). The order they run in lives in
//! [`crate::pipeline`].

pub mod blockquote;
pub mod emphasis;
pub mod headings;
pub mod links;
pub mod lists;
pub mod macros;
pub mod tables;

/// Markup emitted for a forced line break.
pub(crate) const LINE_BREAK: &str = "<br />";

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub(crate) fn ends_with_break(text: &str) -> bool {
    text.ends_with("<br />") || text.ends_with("<br/>")
}

/// Splits a leading `>` run off a line.
///
/// Returns the normalized prefix (`">"` repeated, plus one space) and the rest
/// of the line with its leading blanks removed. Lines without a quote marker
/// come back untouched with an empty prefix.
pub(crate) fn split_quote_prefix(raw: &str) -> (String, &str) {
    let s = raw.trim_start_matches(' ');
    let depth = s.len() - s.trim_start_matches('>').len();
    if depth == 0 {
        return (String::new(), raw);
    }
    let rest = s[depth..].trim_start_matches([' ', '\t']);
    (format!("{} ", ">".repeat(depth)), rest)
}
