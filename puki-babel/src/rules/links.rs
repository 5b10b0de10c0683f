//! `[[...]]` bracket links → Markdown links.
//!
//! Supported shapes:
//!
//! | Source                           | Output                                   |
//! |----------------------------------|------------------------------------------|
//! | `[[ページ名]]`                   | `[ページ名](docs/ページ名)`              |
//! | `[[ラベル>ページ名#anchor]]`     | `[ラベル](docs/ページ名#anchor)`         |
//! | `[[公式>http://ex.com]]`         | `[公式](http://ex.com)`                  |
//! | `[[ニュース:http://ex.com/n]]`   | `[ニュース](http://ex.com/n)`            |
//! | `[[親/子]]`                      | `[子](docs/親/子)`                       |
//!
//! Internal targets are slugified, anchors are kept verbatim. A link with an
//! empty target (`[[]]`, `[[label>]]`) gets an empty URL. An anchor with no
//! page (`[[label>#sec]]`) still points into the docs tree.

use crate::slug::slugify;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Directory, relative to the site content root, holding every page except
/// the front page. Internal links point into it.
pub const DOCS_DIR: &str = "docs";

static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\]]*)\]\]").unwrap());
static LABEL_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?):\s*(https?://\S+|mailto:\S+)$").unwrap());

const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

/// Parsed form of one bracket link.
#[derive(Debug, Clone, PartialEq)]
struct LinkTarget<'a> {
    label: &'a str,
    base: &'a str,
    anchor: &'a str,
    is_external: bool,
    has_alias: bool,
}

impl<'a> LinkTarget<'a> {
    fn parse(inner: &'a str) -> Self {
        let (mut label, mut target, has_alias) = match inner.split_once('>') {
            Some((label, target)) => (label.trim(), target.trim(), true),
            None => (inner, inner, false),
        };

        if !has_alias {
            if let Some(caps) = LABEL_URL_RE.captures(inner) {
                if let (Some(l), Some(u)) = (caps.get(1), caps.get(2)) {
                    label = l.as_str().trim();
                    target = u.as_str().trim();
                }
            }
        }

        let (base, anchor) = match target.find('#') {
            Some(idx) => target.split_at(idx),
            None => (target, ""),
        };

        LinkTarget {
            label,
            base,
            anchor,
            is_external: is_external_url(base),
            has_alias,
        }
    }

    fn to_markdown(&self) -> String {
        if self.is_external {
            return format!("[{}]({}{})", self.label, self.base, self.anchor);
        }
        let label = if self.has_alias {
            self.label
        } else {
            last_segment(self.base)
        };
        let url = if self.base.is_empty() && self.anchor.is_empty() {
            String::new()
        } else {
            format!("{DOCS_DIR}/{}{}", slugify(self.base), self.anchor)
        };
        format!("[{label}]({url})")
    }
}

/// Rewrites every `[[...]]` token in `content`.
pub fn convert_links(content: &str) -> String {
    LINK_RE
        .replace_all(content, |caps: &Captures| {
            LinkTarget::parse(&caps[1]).to_markdown()
        })
        .into_owned()
}

fn is_external_url(s: &str) -> bool {
    let lower = s.to_lowercase();
    EXTERNAL_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

fn last_segment(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
