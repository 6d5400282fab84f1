//! Shared configuration loader for the mdtex toolchain.
//!
//! `defaults/mdtex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdtexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use mdtex_babel::formats::latex::{RenderOptions, TopLevel};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/mdtex.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG: &str = "mdtex.toml";

/// Top-level configuration consumed by mdtex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdtexConfig {
    pub render: RenderConfig,
    pub convert: ConvertConfig,
}

/// Mirrors the knobs exposed by the LaTeX renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub top_level: TopLevel,
    pub float: String,
    pub image_width: String,
    pub table_columns: String,
    pub include_extension: String,
    pub keep_comments: bool,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            top_level: config.top_level,
            float: config.float,
            image_width: config.image_width,
            table_columns: config.table_columns,
            include_extension: config.include_extension,
            keep_comments: config.keep_comments,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            top_level: config.top_level,
            float: config.float.clone(),
            image_width: config.image_width.clone(),
            table_columns: config.table_columns.clone(),
            include_extension: config.include_extension.clone(),
            keep_comments: config.keep_comments,
        }
    }
}

/// Conversion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Output format used when neither `--to` nor the output extension picks one.
    pub format: String,
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
    pub fn build(self) -> Result<MdtexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdtexConfig, ConfigError> {
    Loader::new().build()
}
