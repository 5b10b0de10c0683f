//! Quote prefix normalization.
//!
//! `>`, `>>` and `>>>` open quotes of increasing depth; `<`, `<<` and `<<<`
//! on a line of their own step back out. Markdown has no explicit exit
//! marker, so those lines become blank.

const EXIT_MARKERS: &[&str] = &["<", "<<", "<<<"];

pub fn normalize_blockquotes(content: &str) -> String {
    content
        .split('\n')
        .map(|raw| {
            let t = raw.trim_start_matches(' ');
            if t.starts_with('>') {
                let rest = t.trim_start_matches('>');
                let depth = t.len() - rest.len();
                format!("{} {}", ">".repeat(depth), rest.trim_start_matches([' ', '\t']))
            } else if EXIT_MARKERS.contains(&raw.trim()) {
                String::new()
            } else {
                raw.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
