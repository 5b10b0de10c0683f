//! Site publishing.
//!
//! Writes converted pages into a Hugo content tree:
//!
//! ```text
//! <out>/content/_index.md                 the front page
//! <out>/content/docs/<slug>/_index.md     every other page
//! <out>/gone-redirects.yaml               optional 410 mapping for old URLs
//! ```
//!
//! Every page file starts with a YAML front matter block. Nested pages
//! (`Parent/Child`) are titled by their last segment only; the parents are
//! already part of the directory path.
//!
//! Use [`render_page`] to get a single document in memory, or
//! [`publish_site`] to write the whole tree.

use crate::error::BabelError;
use crate::page::Page;
use crate::pipeline::convert;
use crate::rules::links::DOCS_DIR;
use crate::slug::slugify;
use chrono::SecondsFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the "gone" redirect mapping is written and what it contains.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectLayout {
    /// File name, relative to the output root
    pub file_name: String,
    /// URL prefix the old wiki served pages under
    pub url_prefix: String,
    /// HTTP status emitted for every old URL
    pub status: u16,
}

impl Default for RedirectLayout {
    fn default() -> Self {
        RedirectLayout {
            file_name: "gone-redirects.yaml".to_string(),
            url_prefix: "/wiki/".to_string(),
            status: 410,
        }
    }
}

/// Shape of the generated Hugo site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLayout {
    /// Content directory, relative to the output root
    pub content_dir: String,
    /// File name of every page document
    pub index_file: String,
    /// Value of the `draft` front matter key
    pub draft: bool,
    /// Redirect mapping, if one should be written
    pub redirects: Option<RedirectLayout>,
}

impl Default for SiteLayout {
    fn default() -> Self {
        SiteLayout {
            content_dir: "content".to_string(),
            index_file: "_index.md".to_string(),
            draft: false,
            redirects: None,
        }
    }
}

/// Files written by [`publish_site`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PublishReport {
    /// One entry per page, in input order
    pub pages: Vec<PathBuf>,
    /// The redirect mapping, when enabled
    pub redirects: Option<PathBuf>,
}

/// Path of the document a page is written to.
///
/// The slug is added one segment at a time, so a name with a leading or
/// doubled `/` still lands below `<out>/<content_dir>/docs`.
pub fn page_output_path(
    out: &Path,
    page: &Page,
    default_page: &str,
    layout: &SiteLayout,
) -> PathBuf {
    let content = out.join(&layout.content_dir);
    if page.name() == default_page {
        content.join(&layout.index_file)
    } else {
        let mut path = content.join(DOCS_DIR);
        for segment in page.slug().split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.join(&layout.index_file)
    }
}

/// Escapes a string for a double-quoted YAML scalar.
fn yaml_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Title and slug shown in the front matter.
fn display_names(page: &Page, is_default: bool) -> (String, String) {
    if is_default || !page.name().contains('/') {
        return (page.name().to_string(), page.slug().to_string());
    }
    let leaf = page.leaf_name();
    (leaf.to_string(), slugify(leaf))
}

/// YAML front matter block for a page, followed by one blank line.
pub fn front_matter(page: &Page, is_default: bool, draft: bool) -> String {
    let (title, slug) = display_names(page, is_default);
    let date = page.date().to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        "---\ntitle: \"{}\"\ndate: {date}\nlastmod: {date}\nslug: \"{}\"\ndraft: {draft}\n---\n\n",
        yaml_escape(&title),
        yaml_escape(&slug),
    )
}

/// Full document for one page: front matter plus the converted body.
pub fn render_page(page: &Page, is_default: bool, draft: bool) -> String {
    let mut doc = front_matter(page, is_default, draft);
    doc.push_str(&convert(page.content()));
    doc
}

/// YAML list mapping every old page URL to a fixed status code.
pub fn gone_mapping(pages: &[Page], url_prefix: &str, status: u16) -> String {
    pages
        .iter()
        .map(|page| {
            format!(
                "- url: \"{}\"\n  code: {status}\n",
                yaml_escape(&format!("{url_prefix}{}", page.name()))
            )
        })
        .collect()
}

fn write_file(path: &Path, contents: &str) -> Result<(), BabelError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| BabelError::io(parent, err))?;
    }
    fs::write(path, contents).map_err(|err| BabelError::io(path, err))
}

/// Converts and writes every page, then the redirect mapping if enabled.
///
/// # Errors
///
/// Returns [`BabelError::Io`] for the first directory or file that cannot be
/// written. Files written before the failure are left in place.
pub fn publish_site(
    pages: &[Page],
    default_page: &str,
    out: &Path,
    layout: &SiteLayout,
) -> Result<PublishReport, BabelError> {
    let mut report = PublishReport::default();

    for page in pages {
        let is_default = page.name() == default_page;
        let path = page_output_path(out, page, default_page, layout);
        write_file(&path, &render_page(page, is_default, layout.draft))?;
        log::debug!("wrote '{}' to {}", page.name(), path.display());
        report.pages.push(path);
    }

    if let Some(redirects) = &layout.redirects {
        let path = out.join(&redirects.file_name);
        write_file(
            &path,
            &gone_mapping(pages, &redirects.url_prefix, redirects.status),
        )?;
        log::info!("wrote {} redirects to {}", pages.len(), path.display());
        report.redirects = Some(path);
    }

    Ok(report)
}
