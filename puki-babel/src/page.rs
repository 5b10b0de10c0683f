//! The page value object shared by ingestion, conversion and publishing.

use crate::slug::slugify;
use chrono::{DateTime, Utc};

/// One wiki page as read from the source tree.
///
/// The slug is derived once from the name when the page is built and is
/// never recomputed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    name: String,
    slug: String,
    content: String,
    date: DateTime<Utc>,
}

impl Page {
    pub fn new(name: impl Into<String>, content: impl Into<String>, date: DateTime<Utc>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Page {
            name,
            slug,
            content: content.into(),
            date,
        }
    }

    /// Logical page path, `/` separating nesting levels.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Raw PukiWiki markup.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Last `/` segment of the name; the whole name for top-level pages.
    pub fn leaf_name(&self) -> &str {
        match self.name.rfind('/') {
            Some(idx) => &self.name[idx + 1..],
            None => &self.name,
        }
    }
}
