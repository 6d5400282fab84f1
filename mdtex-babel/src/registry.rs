//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::latex::RenderOptions;
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let latex = registry.convert("# Title", "latex")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        let mut names = self.list_formats();
        names.retain(|name| {
            self.formats
                .get(name)
                .is_some_and(|format| format.file_extensions().contains(&extension))
        });
        names.into_iter().next()
    }

    /// Convert source text using the specified format
    pub fn convert(&self, source: &str, format: &str) -> Result<String, FormatError> {
        self.get(format)?.convert(source)
    }

    /// Convert source text using the specified format and options
    pub fn convert_with_options(
        &self,
        source: &str,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.get(format)?.convert_with_options(source, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        Self::with_render_options(RenderOptions::default())
    }

    /// Create a registry with default formats, rendering LaTeX with the given options
    pub fn with_render_options(options: RenderOptions) -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::latex::LatexFormat::new(options));
        registry.register(crate::formats::tag::TagFormat);
        registry.register(crate::formats::events::EventsFormat);
        registry.register(crate::formats::events::EventsJsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
