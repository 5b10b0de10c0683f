//! `'''italic'''` and `''bold''` spans.
//!
//! Triple quotes are replaced before double quotes: a triple span containing a
//! double span must end up as `<em>..<strong>..</strong>..</em>`, and running
//! the double pattern first would eat the inner quotes of the triple.

use once_cell::sync::Lazy;
use regex::Regex;

static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'''(.*?)'''").unwrap());
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"''(.*?)''").unwrap());

pub fn convert_emphasis(content: &str) -> String {
    let content = ITALIC_RE.replace_all(content, "<em>${1}</em>");
    BOLD_RE
        .replace_all(&content, "<strong>${1}</strong>")
        .into_owned()
}
