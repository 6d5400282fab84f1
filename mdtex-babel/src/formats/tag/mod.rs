//! XML-like event tag serialization
//!
//! Dumps the parser's event stream as nested tags, which makes the block structure the
//! parser recovered easy to eyeball.
//!
//! ## Format
//!
//! - Begin/End event pairs → an element wrapping everything in between
//! - Other events → a single element, payload as text content
//! - Scalar fields (level, marker, language) → attributes
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <title level="1">Introduction</title>
//!   <list marker="-">
//!     <item marker="-"/>
//!     <text>first point</text>
//!   </list>
//! </document>
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::parse_to_events;
use crate::ir::events::{Event, ListMarker};
use std::collections::HashMap;

/// Serialize an event stream to the tag format
pub fn serialize_events(events: &[Event]) -> String {
    serialize_events_with_params(events, &HashMap::new())
}

/// Serialize an event stream with optional parameters
///
/// # Parameters
///
/// - `"skip-blank"`: When set to `"true"`, blank text lines are left out.
pub fn serialize_events_with_params(events: &[Event], params: &HashMap<String, String>) -> String {
    let skip_blank = params
        .get("skip-blank")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    let mut result = String::from("<document>\n");
    let mut depth = 1;

    for event in events {
        match event {
            Event::BeginTable => open(&mut result, &mut depth, "table", ""),
            Event::BeginEquation => open(&mut result, &mut depth, "equation", ""),
            Event::BeginCode { language } => {
                let attr = language
                    .as_deref()
                    .map(|l| format!(" language=\"{}\"", escape_xml(l)))
                    .unwrap_or_default();
                open(&mut result, &mut depth, "code", &attr);
            }
            Event::BeginList { marker } => {
                open(&mut result, &mut depth, "list", &marker_attr(marker))
            }
            Event::EndTable => close(&mut result, &mut depth, "table"),
            Event::EndEquation => close(&mut result, &mut depth, "equation"),
            Event::EndCode => close(&mut result, &mut depth, "code"),
            Event::EndList { .. } => close(&mut result, &mut depth, "list"),
            Event::Title { level, text } => leaf(
                &mut result,
                depth,
                "title",
                &format!(" level=\"{level}\""),
                text,
            ),
            Event::Image { caption, url } => leaf(
                &mut result,
                depth,
                "image",
                &format!(" url=\"{}\"", escape_xml(url)),
                caption,
            ),
            Event::TableRule => empty(&mut result, depth, "rule", ""),
            Event::TableRow { cells } => {
                let indent = "  ".repeat(depth);
                result.push_str(&format!("{indent}<row>\n"));
                for cell in cells {
                    leaf(&mut result, depth + 1, "cell", "", cell);
                }
                result.push_str(&format!("{indent}</row>\n"));
            }
            Event::EquationLine { text } | Event::CodeLine { text } => {
                leaf(&mut result, depth, "line", "", text)
            }
            Event::ListItem { marker } => empty(&mut result, depth, "item", &marker_attr(marker)),
            Event::Text { line } => {
                if !(skip_blank && line.trim().is_empty()) {
                    leaf(&mut result, depth, "text", "", line)
                }
            }
            Event::Comment { text } => leaf(&mut result, depth, "comment", "", text),
            Event::Include { path } => leaf(&mut result, depth, "include", "", path),
        }
    }

    result.push_str("</document>");
    result
}

fn open(out: &mut String, depth: &mut usize, tag: &str, attrs: &str) {
    out.push_str(&format!("{}<{tag}{attrs}>\n", "  ".repeat(*depth)));
    *depth += 1;
}

fn close(out: &mut String, depth: &mut usize, tag: &str) {
    *depth = depth.saturating_sub(1).max(1);
    out.push_str(&format!("{}</{tag}>\n", "  ".repeat(*depth)));
}

fn leaf(out: &mut String, depth: usize, tag: &str, attrs: &str, text: &str) {
    out.push_str(&format!(
        "{}<{tag}{attrs}>{}</{tag}>\n",
        "  ".repeat(depth),
        escape_xml(text)
    ));
}

fn empty(out: &mut String, depth: usize, tag: &str, attrs: &str) {
    out.push_str(&format!("{}<{tag}{attrs}/>\n", "  ".repeat(depth)));
}

fn marker_attr(marker: &ListMarker) -> String {
    match marker {
        ListMarker::Ordered => " marker=\"1.\"".to_string(),
        ListMarker::Bullet(c) => format!(" marker=\"{}\"", escape_xml(&c.to_string())),
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag dump of the parser events"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn convert(&self, source: &str) -> Result<String, FormatError> {
        Ok(serialize_events(&parse_to_events(source)))
    }

    fn convert_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if let Some(key) = options.keys().find(|k| k.as_str() != "skip-blank") {
            return Err(FormatError::UnknownOption(key.clone()));
        }
        Ok(serialize_events_with_params(
            &parse_to_events(source),
            options,
        ))
    }
}
