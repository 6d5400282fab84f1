//! Inspect views
//!
//! The views `mdtex inspect` can print. Each one is a dump of the parser's event stream,
//! useful for finding out why a document renders the way it does:
//!
//! - `events`: one line per event (default)
//! - `events-json`: the events as a JSON array
//! - `tag`: XML-like tags, nested by begin/end events
//!
//! ## Extra Parameters
//!
//! - `skip-blank`: with the `tag` view, leaves blank text lines out.
//!
//! Example: `mdtex inspect doc.md tag --extra-skip-blank`

use mdtex_babel::FormatRegistry;
use std::collections::HashMap;

/// All views, in the order they are listed in help output.
pub const AVAILABLE_VIEWS: &[&str] = &["events", "events-json", "tag"];

pub const DEFAULT_VIEW: &str = "events";

/// Render `source` through one of the inspect views.
pub fn execute_view(
    source: &str,
    view: &str,
    params: &HashMap<String, String>,
) -> Result<String, String> {
    if !AVAILABLE_VIEWS.contains(&view) {
        return Err(format!(
            "Unknown view '{view}'. Available views: {}",
            AVAILABLE_VIEWS.join(", ")
        ));
    }
    let registry = FormatRegistry::default();
    registry
        .convert_with_options(source, view, params)
        .map_err(|e| e.to_string())
}
