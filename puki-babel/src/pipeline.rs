//! The conversion pipeline.
//!
//! A page is converted by threading its text through a fixed table of
//! stages. Every stage is a pure `&str -> String` function, so the table can
//! also be replayed partially ([`convert_through`]) or recorded step by step
//! ([`trace`]) for debugging.
//!
//! The order is load-bearing:
//!
//! - lists run before tables, so list markers in running text are never read
//!   as table syntax;
//! - emphasis runs before tables, so tail cleanup can find the `<strong>` and
//!   `<em>` tags it has to undo;
//! - tail separation runs once more after alignment residue removal, which
//!   can glue a line back onto a table row.

use crate::rules::lists::{convert_ordered_lists, convert_unordered_lists};
use crate::rules::{blockquote, emphasis, headings, links, macros, tables};
use serde::Serialize;

/// One named step of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub description: &'static str,
    pub apply: fn(&str) -> String,
}

/// All stages, in execution order.
pub const STAGES: &[Stage] = &[
    Stage {
        name: "directives",
        description: "drop #author and #freeze lines",
        apply: macros::strip_block_directives,
    },
    Stage {
        name: "headings",
        description: "* headings to # headings",
        apply: headings::convert_headings,
    },
    Stage {
        name: "links",
        description: "[[...]] links to Markdown links",
        apply: links::convert_links,
    },
    Stage {
        name: "recent",
        description: "collapse #recent blocks",
        apply: macros::collapse_recent,
    },
    Stage {
        name: "timestamps",
        description: "unwrap &new{...}",
        apply: macros::expand_timestamps,
    },
    Stage {
        name: "counters",
        description: "&counter and &online to comments",
        apply: macros::expand_counters,
    },
    Stage {
        name: "inline-styles",
        description: "&br;, &size and &color",
        apply: macros::expand_inline_styles,
    },
    Stage {
        name: "emphasis",
        description: "''bold'' and '''italic'''",
        apply: emphasis::convert_emphasis,
    },
    Stage {
        name: "ordered-lists",
        description: "+ lists",
        apply: convert_ordered_lists,
    },
    Stage {
        name: "unordered-lists",
        description: "- lists",
        apply: convert_unordered_lists,
    },
    Stage {
        name: "blockquotes",
        description: "normalize > prefixes, blank < exits",
        apply: blockquote::normalize_blockquotes,
    },
    Stage {
        name: "tables",
        description: "pipe tables, row tails and ~ line breaks",
        apply: tables::convert_tables,
    },
    Stage {
        name: "row-tails",
        description: "split text trailing a table row",
        apply: tables::separate_row_tails,
    },
    Stage {
        name: "alignment",
        description: "remove LEFT:/CENTER:/RIGHT: residue",
        apply: tables::strip_alignment_residue,
    },
    Stage {
        name: "row-tails-final",
        description: "split row tails exposed by alignment removal",
        apply: tables::separate_row_tails,
    },
];

/// Content after one stage, as recorded by [`trace`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageSnapshot {
    pub stage: &'static str,
    pub content: String,
}

pub fn stage_names() -> Vec<&'static str> {
    STAGES.iter().map(|stage| stage.name).collect()
}

fn run_stage(stage: &Stage, content: &str) -> String {
    let out = (stage.apply)(content);
    log::trace!(
        "stage {}: {} -> {} bytes",
        stage.name,
        content.len(),
        out.len()
    );
    out
}

/// Converts one page of PukiWiki markup to Markdown.
pub fn convert(content: &str) -> String {
    STAGES
        .iter()
        .fold(content.to_string(), |acc, stage| run_stage(stage, &acc))
}

/// Runs the pipeline up to and including the named stage.
///
/// Returns `None` for an unknown stage name.
pub fn convert_through(content: &str, stage_name: &str) -> Option<String> {
    let last = STAGES.iter().position(|stage| stage.name == stage_name)?;
    Some(
        STAGES[..=last]
            .iter()
            .fold(content.to_string(), |acc, stage| run_stage(stage, &acc)),
    )
}

/// Runs the whole pipeline, recording the content after every stage.
pub fn trace(content: &str) -> Vec<StageSnapshot> {
    let mut current = content.to_string();
    STAGES
        .iter()
        .map(|stage| {
            current = run_stage(stage, &current);
            StageSnapshot {
                stage: stage.name,
                content: current.clone(),
            }
        })
        .collect()
}
