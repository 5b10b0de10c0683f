//! Pipe tables.
//!
//! PukiWiki tables are already pipe delimited, but carry cell directives
//! Markdown does not understand:
//!
//! - `LEFT:`, `CENTER:`, `RIGHT:`, `NEXT:` alignment prefixes
//! - `~` alone in a cell: row span (continue the cell above)
//! - `~text`: header cell
//! - `>`: column span / width hint
//! - a trailing `h` cell: header row
//!
//! Rows may also carry text after their closing `|` (the "tail"), e.g. the
//! `h` header marker glued to a styled caption. Tails are moved out of the
//! table and emitted as plain lines after it, one blank line below the last
//! row.
//!
//! Later rules can glue text back onto a row (alignment residue removal joins
//! a `CENTER:` line to the row above it), so [`separate_row_tails`] runs as a
//! standalone pass over the whole document as well.

use super::{is_blank, LINE_BREAK};
use once_cell::sync::Lazy;
use regex::Regex;

static CELL_ALIGN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(LEFT|CENTER|RIGHT|NEXT):").unwrap());
static ALIGN_RESIDUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(^|\|)[ \t]*(?:LEFT|CENTER|RIGHT):").unwrap());
static STRONG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<strong>(.*?)</strong>").unwrap());
static EM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<em>(.*?)</em>").unwrap());

/// One source row split into cleaned cells and the text after its last `|`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub tail: Option<String>,
}

impl TableRow {
    /// Splits a `|`-delimited line. Returns `None` when there is no `|` at all.
    pub fn parse(raw: &str) -> Option<Self> {
        let start = raw.find('|')?;
        let end = raw.rfind('|').unwrap_or(start);

        let tail = Some(raw[end + 1..].trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        if end == start {
            return Some(TableRow {
                cells: Vec::new(),
                tail,
            });
        }

        let mut cells: Vec<&str> = raw[start + 1..end].split('|').map(str::trim).collect();
        if cells.last() == Some(&"h") {
            cells.pop();
        }

        Some(TableRow {
            cells: cells.into_iter().map(clean_cell).collect(),
            tail,
        })
    }

    /// Column count as seen by the separator row.
    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    pub fn render(&self) -> String {
        if self.cells.is_empty() {
            return "|".to_string();
        }
        format!("|{}|", self.cells.join("|"))
    }
}

fn clean_cell(cell: &str) -> String {
    let mut cell = CELL_ALIGN_RE.replace_all(cell, "").into_owned();
    if cell.trim() == "~" {
        cell.clear();
    }
    if let Some(rest) = cell.strip_prefix('~') {
        cell = rest.trim_start_matches([' ', '\t']).to_string();
    }
    cell.trim_start_matches('>').to_string()
}

/// Cleans a row tail before it is emitted below the table.
///
/// Emphasis tags are turned back into quote markers: in tails they are
/// captions written next to the header marker, not real emphasis.
pub fn clean_tail(tail: &str) -> String {
    let t = tail.trim();
    if t.is_empty() {
        return String::new();
    }
    let t = t.replace('~', LINE_BREAK);
    let t = STRONG_RE.replace_all(&t, "''${1}''");
    let t = EM_RE.replace_all(&t, "'''${1}'''");
    if t == "h" {
        return String::new();
    }
    let mut chars = t.chars();
    if chars.next() == Some('h') {
        if let Some(second) = chars.next() {
            if !second.is_alphanumeric() {
                return t[1..].trim().to_string();
            }
        }
    }
    t.trim().to_string()
}

fn is_table_line(line: &str) -> bool {
    line.trim().starts_with('|')
}

fn separator_row(columns: usize) -> String {
    format!("|{}", "---|".repeat(columns))
}

/// Converts every table block and applies `~` line breaks to all other
/// non-heading lines.
pub fn convert_tables(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if !is_table_line(line) {
            if line.trim().starts_with('#') {
                out.push(line.to_string());
            } else {
                out.push(line.replace('~', LINE_BREAK));
            }
            i += 1;
            continue;
        }

        let mut rows: Vec<TableRow> = Vec::new();
        let mut tails: Vec<String> = Vec::new();
        let mut j = i;
        while j < lines.len() && is_table_line(lines[j]) {
            if let Some(row) = TableRow::parse(lines[j]) {
                if let Some(tail) = row.tail.as_deref().map(clean_tail) {
                    if !tail.is_empty() {
                        tails.push(tail);
                    }
                }
                rows.push(row);
            }
            j += 1;
        }

        let mut rendered: Vec<String> = rows.iter().map(TableRow::render).collect();
        if rows.len() > 1 && rows[0].columns() > 0 {
            rendered.insert(1, separator_row(rows[0].columns()));
        }
        out.extend(rendered);

        if !tails.is_empty() {
            out.push(String::new());
        } else if let Some(next) = lines.get(j) {
            let next_is_text = !is_blank(next) && !is_table_line(next);
            if next_is_text && out.last().is_some_and(|last| !is_blank(last)) {
                out.push(String::new());
            }
        }
        out.extend(tails);
        i = j;
    }

    out.join("\n")
}

/// Moves any text after a row's last `|` onto its own line, one blank line
/// below the row.
pub fn separate_row_tails(content: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut split_any = false;

    for raw in content.split('\n') {
        if is_table_line(raw) {
            if let Some(last) = raw.rfind('|') {
                let tail = raw[last + 1..].trim();
                if !tail.is_empty() {
                    out.push(raw[..=last].trim_end().to_string());
                    out.push(String::new());
                    out.push(tail.to_string());
                    split_any = true;
                    continue;
                }
            }
        }
        out.push(raw.to_string());
    }

    if split_any {
        out = compress_blank_runs(out, 2);
    }
    out.join("\n")
}

fn compress_blank_runs(lines: Vec<String>, max: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut run = 0;
    for line in lines {
        if is_blank(&line) {
            run += 1;
            if run <= max {
                out.push(line);
            }
        } else {
            run = 0;
            out.push(line);
        }
    }
    out
}

/// Removes alignment prefixes left outside tables.
///
/// Only prefixes at the start of a line or right after a `|` are removed, and
/// the match never crosses a line break.
pub fn strip_alignment_residue(content: &str) -> String {
    ALIGN_RESIDUE_RE.replace_all(content, "${1}").into_owned()
}
