//! Format trait definition
//!
//! Every output mdtex can produce from the markdown dialect is a [`Format`]: the LaTeX
//! renderer as well as the inspect views of the event stream. The trait gives them a
//! uniform interface so the registry and the CLI can treat them alike.

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn convert(&self, source: &str) -> Result<String, FormatError> {
///         Ok(source.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "latex", "tag")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for detecting the target format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Convert markdown source into this format
    fn convert(&self, source: &str) -> Result<String, FormatError>;

    /// Convert, optionally using extra parameters.
    ///
    /// The default implementation accepts no parameters at all.
    fn convert_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.convert(source)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
