//! Transform-style entry points
//!
//! Small functional wrappers over the parser and the LaTeX renderer, for callers that want a
//! string in and a string out without going through the registry.

use crate::error::FormatError;
use crate::formats::latex::{render, RenderOptions};
use std::collections::HashMap;

pub use crate::formats::markdown::parse_to_events;

/// Convert a markdown document to LaTeX with the default render options
///
/// # Example
///
/// ```
/// use mdtex_babel::transforms::convert_to_latex;
///
/// let latex = convert_to_latex("## Results\n\nAll **good**.");
/// assert_eq!(latex, "\\section{Results}\n\nAll \\textbf{good}.\n");
/// ```
pub fn convert_to_latex(source: &str) -> String {
    render(source, &RenderOptions::default())
}

/// Convert a markdown document to LaTeX, applying `key → value` overrides on top of `base`
pub fn convert_to_latex_with_options(
    source: &str,
    base: &RenderOptions,
    overrides: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let mut options = base.clone();
    options.apply_overrides(overrides)?;
    Ok(render(source, &options))
}
