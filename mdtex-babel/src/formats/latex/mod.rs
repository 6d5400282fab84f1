//! LaTeX output
//!
//! | Event            | LaTeX                                                        |
//! |------------------|--------------------------------------------------------------|
//! | Title            | `\chapter` … `\subparagraph`, starting at the configured top |
//! | Image            | `figure` with `\includegraphics`, caption and optional label |
//! | Table            | `table` + `tabular`, rows joined with ` & ` and ended by `\\` |
//! | TableRule        | `\hline`                                                     |
//! | Equation         | `equation` with optional label, body verbatim                |
//! | Code             | `lstlisting`, body verbatim                                  |
//! | List             | `enumerate` / `itemize`, `\item`                             |
//! | Include          | `\input{path.tex}`                                           |
//! | Comment          | directive, raw passthrough, or `% comment`                   |
//!
//! Table, image and equation read their float placement, caption, width, columns and label
//! from the directive store (see [`directives`]), falling back to [`RenderOptions`].

pub mod directives;
pub mod escape;
pub mod renderer;

pub use escape::convert_text;
pub use renderer::Renderer;

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::Parser;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Which sectioning command a level-one title maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopLevel {
    /// `#` is `\chapter` (book and report classes)
    #[default]
    Chapter,
    /// `#` is `\section` (article class)
    Section,
}

impl FromStr for TopLevel {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "chapter" => Ok(TopLevel::Chapter),
            "section" => Ok(TopLevel::Section),
            _ => Err(FormatError::InvalidOption {
                key: "top-level".to_string(),
                value: value.to_string(),
            }),
        }
    }
}

/// Defaults used when no directive overrides them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub top_level: TopLevel,
    /// Float placement for tables and figures
    pub float: String,
    /// Image width as a fraction of `\linewidth`
    pub image_width: String,
    /// `tabular` column specification
    pub table_columns: String,
    /// Extension appended to include targets
    pub include_extension: String,
    /// Emit ordinary comments as `%` lines
    pub keep_comments: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            top_level: TopLevel::Chapter,
            float: directives::HERE.to_string(),
            image_width: "0.5".to_string(),
            table_columns: "c".to_string(),
            include_extension: "tex".to_string(),
            keep_comments: true,
        }
    }
}

impl RenderOptions {
    /// Apply `key → value` overrides such as those passed with `--extra-<key>`.
    pub fn apply_overrides(&mut self, options: &HashMap<String, String>) -> Result<(), FormatError> {
        for (key, value) in options {
            match key.as_str() {
                "top-level" => self.top_level = value.parse()?,
                "float" => self.float = value.clone(),
                "image-width" => self.image_width = value.clone(),
                "table-columns" => self.table_columns = value.clone(),
                "include-extension" => self.include_extension = value.clone(),
                "keep-comments" => self.keep_comments = parse_bool(key, value)?,
                _ => return Err(FormatError::UnknownOption(key.clone())),
            }
        }
        Ok(())
    }
}

/// Parse a boolean option value; `true/false`, `1/0`, `yes/no` and `y/n` in any case.
pub fn parse_bool(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(FormatError::InvalidOption {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Render a whole markdown document to LaTeX.
pub fn render(source: &str, options: &RenderOptions) -> String {
    let mut parser = Parser::new(Renderer::new(options.clone()));
    parser.parse_str(source);
    parser.into_sink().into_output()
}

/// Format implementation for LaTeX output
#[derive(Debug, Clone, Default)]
pub struct LatexFormat {
    options: RenderOptions,
}

impl LatexFormat {
    pub fn new(options: RenderOptions) -> Self {
        LatexFormat { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Format for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "LaTeX source"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tex", "latex"]
    }

    fn convert(&self, source: &str) -> Result<String, FormatError> {
        Ok(render(source, &self.options))
    }

    fn convert_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut merged = self.options.clone();
        merged.apply_overrides(options)?;
        Ok(render(source, &merged))
    }
}
