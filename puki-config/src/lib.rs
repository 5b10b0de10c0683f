//! Shared configuration loader for the puki2hugo toolchain.
//!
//! `defaults/puki.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PukiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use puki_babel::{RedirectLayout, SiteLayout, SourceLayout};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/puki.default.toml");

/// Top-level configuration consumed by puki2hugo applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PukiConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub redirects: RedirectsConfig,
}

/// Where the PukiWiki data lives.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub root: PathBuf,
    pub wiki_dir: String,
    pub page_extension: String,
    pub settings_file: String,
    pub default_page: String,
}

impl From<&SourceConfig> for SourceLayout {
    fn from(config: &SourceConfig) -> Self {
        SourceLayout {
            wiki_dir: config.wiki_dir.clone(),
            page_extension: config.page_extension.clone(),
            settings_file: config.settings_file.clone(),
            default_page: config.default_page.clone(),
        }
    }
}

/// Shape of the generated Hugo site.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub root: PathBuf,
    pub content_dir: String,
    pub index_file: String,
    pub draft: bool,
}

/// The "gone" redirect mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct RedirectsConfig {
    pub enabled: bool,
    pub file_name: String,
    pub url_prefix: String,
    pub status: u16,
}

impl From<&RedirectsConfig> for RedirectLayout {
    fn from(config: &RedirectsConfig) -> Self {
        RedirectLayout {
            file_name: config.file_name.clone(),
            url_prefix: config.url_prefix.clone(),
            status: config.status,
        }
    }
}

impl From<&PukiConfig> for SiteLayout {
    fn from(config: &PukiConfig) -> Self {
        SiteLayout {
            content_dir: config.output.content_dir.clone(),
            index_file: config.output.index_file.clone(),
            draft: config.output.draft,
            redirects: config
                .redirects
                .enabled
                .then(|| RedirectLayout::from(&config.redirects)),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PukiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PukiConfig, ConfigError> {
    Loader::new().build()
}
