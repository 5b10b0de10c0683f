//! `-` bullet lists and `+` numbered lists.
//!
//! Both list flavours share one line-by-line converter, parameterized by
//! [`ListKind`]. The nesting level of an item is its marker count plus half
//! its leading spaces and tabs, so `--- c` and `    - c` both land on level 3.
//! Other whitespace, such as an ideographic space, does not indent an item.
//! Output indentation is two spaces per level below the first. Numbered items
//! are always written as `1.`; the renderer numbers them.
//!
//! A list block is separated from surrounding text by exactly one blank line.
//! Lines following an item that are not items themselves are folded into the
//! item as continuation lines when the item asked for it (trailing `~`, `+~`
//! marker, trailing `<br />`), when the line is indented, or while a
//! continuation is already running.
//!
//! Quote prefixes (`>`, `>>`, ...) are kept in front of the generated list
//! markup so lists can live inside block quotes.

use super::{ends_with_break, is_blank, split_quote_prefix, LINE_BREAK};
use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([ \t]*)(-+)[ \t]*(.*)$").unwrap());
static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([ \t]*)(\++)(~?)[ \t]*(.*)$").unwrap());

/// Which list flavour a converter pass handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-` items, emitted as `- `
    Unordered,
    /// `+` items, emitted as `1. `
    Ordered,
}

impl ListKind {
    fn marker_char(self) -> char {
        match self {
            ListKind::Unordered => '-',
            ListKind::Ordered => '+',
        }
    }

    fn output_marker(self) -> &'static str {
        match self {
            ListKind::Unordered => "- ",
            ListKind::Ordered => "1. ",
        }
    }

    fn parse_item(self, line: &str) -> Option<ListItem> {
        let (leading, markers, forced, text) = match self {
            ListKind::Unordered => {
                let caps = BULLET_RE.captures(line)?;
                (caps[1].len(), caps[2].len(), false, caps[3].trim().to_string())
            }
            ListKind::Ordered => {
                let caps = NUMBERED_RE.captures(line)?;
                (
                    caps[1].len(),
                    caps[2].len(),
                    !caps[3].is_empty(),
                    caps[4].trim().to_string(),
                )
            }
        };
        Some(ListItem {
            level: markers + leading / 2,
            forced_continue: forced,
            text,
        })
    }

    /// Whether `line` (quote prefix allowed) opens an item of this kind.
    fn starts_item(self, line: &str) -> bool {
        let (_, rest) = split_quote_prefix(line);
        rest.trim_start_matches([' ', '\t'])
            .starts_with(self.marker_char())
    }
}

#[derive(Debug)]
struct ListItem {
    level: usize,
    forced_continue: bool,
    text: String,
}

/// Per-line automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    /// Outside any list.
    Idle,
    /// Inside a list; the last item does not expect a continuation.
    InList { level: usize },
    /// Inside a list and absorbing continuation lines into the last item.
    Continuing { level: usize },
}

impl ListState {
    fn level(self) -> Option<usize> {
        match self {
            ListState::Idle => None,
            ListState::InList { level } | ListState::Continuing { level } => Some(level),
        }
    }
}

/// Lines that always end a list: tables and headings (source `*` or an
/// already converted `#`).
fn is_block_boundary(trimmed: &str) -> bool {
    trimmed.starts_with('|') || trimmed.starts_with('*') || trimmed.starts_with('#')
}

/// Indented follow-up text that is neither a list item nor a block boundary.
fn is_indented_text(line: &str) -> bool {
    let trimmed = line.trim();
    (line.starts_with(' ') || line.starts_with('\t'))
        && !trimmed.is_empty()
        && !trimmed.starts_with('-')
        && !trimmed.starts_with('+')
        && !is_block_boundary(trimmed)
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Pushes a blank separator unless the output already ends with one.
fn separate(out: &mut Vec<String>) {
    if out.last().is_some_and(|last| !is_blank(last)) {
        out.push(String::new());
    }
}

/// Converts every list of the given kind in `content`.
pub fn convert_lists(content: &str, kind: ListKind) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut state = ListState::Idle;

    for (i, &raw) in lines.iter().enumerate() {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            state = ListState::Idle;
            out.push(raw.to_string());
            continue;
        }

        if is_block_boundary(trimmed) {
            if state != ListState::Idle {
                separate(&mut out);
                state = ListState::Idle;
            }
            out.push(raw.to_string());
            continue;
        }

        let (prefix, rest) = split_quote_prefix(raw);

        if let Some(mut item) = kind.parse_item(rest) {
            let mut continues = item.forced_continue;
            if let Some(stripped) = item.text.strip_suffix('~') {
                item.text = format!("{}{LINE_BREAK}", stripped.trim_end_matches([' ', '\t']));
                continues = true;
            } else if item.forced_continue && !ends_with_break(&item.text) && !item.text.is_empty()
            {
                item.text.push_str(LINE_BREAK);
            }
            if item.text.is_empty() {
                continue;
            }
            continues |= ends_with_break(&item.text);

            if state == ListState::Idle {
                separate(&mut out);
            }
            out.push(format!(
                "{prefix}{}{}{}",
                indent(item.level - 1),
                kind.output_marker(),
                item.text
            ));

            let next = lines.get(i + 1).copied();
            if !continues && next.is_some_and(is_indented_text) {
                continues = true;
            }
            state = if continues {
                ListState::Continuing { level: item.level }
            } else {
                ListState::InList { level: item.level }
            };

            if let (false, Some(next)) = (continues, next) {
                if is_blank(next) {
                    // the blank line itself closes the block
                    state = ListState::Idle;
                } else if !kind.starts_item(next) && !next.trim().starts_with('|') {
                    out.push(String::new());
                    state = ListState::Idle;
                }
            }
            continue;
        }

        match state.level() {
            Some(level) => {
                if let Some(last) = out.last_mut() {
                    if !ends_with_break(last) {
                        last.push_str(LINE_BREAK);
                    }
                }
                out.push(format!("{prefix}{}{}", indent(level), rest.trim()));
                state = ListState::Continuing { level };
            }
            None => out.push(raw.to_string()),
        }
    }

    out.join("\n")
}

pub fn convert_unordered_lists(content: &str) -> String {
    convert_lists(content, ListKind::Unordered)
}

pub fn convert_ordered_lists(content: &str) -> String {
    convert_lists(content, ListKind::Ordered)
}
