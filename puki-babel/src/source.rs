//! Reading pages out of a PukiWiki installation.
//!
//! PukiWiki stores every page as `<wiki_dir>/<HEX>.txt`, where `<HEX>` is the
//! hex encoding of the UTF-8 page name (`46726F6E7450616765.txt` is
//! `FrontPage`). The front page name is configured in `pukiwiki.ini.php`.

use crate::error::BabelError;
use crate::page::Page;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

static DEFAULT_PAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\$defaultpage\s*=\s*['"]([^'"]+)['"];?"#).unwrap());

/// Where pages and settings live inside a PukiWiki root.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLayout {
    /// Page directory, relative to the root
    pub wiki_dir: String,
    /// Page file extension, without the dot
    pub page_extension: String,
    /// Settings file holding `$defaultpage`, relative to the root
    pub settings_file: String,
    /// Front page name used when the settings file does not say
    pub default_page: String,
}

impl Default for SourceLayout {
    fn default() -> Self {
        SourceLayout {
            wiki_dir: "wiki".to_string(),
            page_extension: "txt".to_string(),
            settings_file: "pukiwiki.ini.php".to_string(),
            default_page: "FrontPage".to_string(),
        }
    }
}

/// Decodes a page file stem into the page name.
pub fn decode_page_name(encoded: &str) -> Result<String, BabelError> {
    let bytes = hex::decode(encoded).map_err(|source| BabelError::InvalidPageName {
        name: encoded.to_string(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| BabelError::NonUtf8PageName {
        name: encoded.to_string(),
    })
}

/// Reads every page below the wiki directory, in file name order.
///
/// The page date is the file modification time. Page bodies that are not
/// valid UTF-8 are decoded lossily.
pub fn read_pages(root: &Path, layout: &SourceLayout) -> Result<Vec<Page>, BabelError> {
    let wiki_dir = root.join(&layout.wiki_dir);
    let mut pages = Vec::new();

    for entry in WalkDir::new(&wiki_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(layout.page_extension.as_str())
        {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = decode_page_name(&stem)?;

        let bytes = fs::read(path).map_err(|err| BabelError::io(path, err))?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(err) => {
                log::warn!(
                    "page '{name}' ({}) is not valid UTF-8, replacing invalid bytes",
                    path.display()
                );
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        let date = entry
            .metadata()
            .ok()
            .and_then(|meta| meta.modified().ok())
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(Utc::now);

        log::debug!("read page '{name}' from {}", path.display());
        pages.push(Page::new(name, content, date));
    }

    Ok(pages)
}

/// Extracts the `$defaultpage` value from settings file text.
pub fn parse_default_page(settings: &str) -> Option<String> {
    settings
        .lines()
        .find_map(|line| DEFAULT_PAGE_RE.captures(line).map(|caps| caps[1].to_string()))
}

/// Front page name of the wiki at `root`.
///
/// A missing settings file or a missing `$defaultpage` line is not an error;
/// the layout's fallback name is used instead.
pub fn default_page(root: &Path, layout: &SourceLayout) -> String {
    let path = root.join(&layout.settings_file);
    let settings = match fs::read(&path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            log::debug!(
                "cannot read {} ({err}), using default page '{}'",
                path.display(),
                layout.default_page
            );
            return layout.default_page.clone();
        }
    };
    parse_default_page(&settings).unwrap_or_else(|| layout.default_page.clone())
}
