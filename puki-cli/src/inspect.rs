//! CLI-specific pipeline inspection
//!
//! `pukiwiki2hugo inspect <file> [stage]` replays the conversion pipeline on a
//! single page and prints the content as it stands after the given stage
//! (the last one by default). With `--json` every stage up to that point is
//! emitted as a list of `{stage, content}` records instead, which is the
//! quickest way to find which rule mangled a page.
//!
//! Example: `pukiwiki2hugo inspect wiki/46726F6E7450616765.txt tables --json`

use puki_babel::pipeline::{self, STAGES};

/// Content after `stage`, or the stage snapshots up to it when `json` is set.
pub fn execute_inspect(source: &str, stage: Option<&str>, json: bool) -> Result<String, String> {
    let stage = match stage {
        Some(name) => name,
        None => STAGES.last().map(|s| s.name).ok_or("no stages defined")?,
    };
    let position = STAGES
        .iter()
        .position(|s| s.name == stage)
        .ok_or_else(|| format!("Unknown stage '{stage}'. Use --list-stages to see all options."))?;

    if json {
        let mut snapshots = pipeline::trace(source);
        snapshots.truncate(position + 1);
        return serde_json::to_string_pretty(&snapshots)
            .map(|out| out + "\n")
            .map_err(|err| err.to_string());
    }

    pipeline::convert_through(source, stage)
        .ok_or_else(|| format!("Unknown stage '{stage}'"))
}

/// Listing printed by `--list-stages`.
pub fn describe_stages() -> String {
    let width = STAGES.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::from("Conversion stages, in order:\n\n");
    for stage in STAGES {
        out.push_str(&format!(
            "  {:<width$}  - {}\n",
            stage.name, stage.description
        ));
    }
    out
}
