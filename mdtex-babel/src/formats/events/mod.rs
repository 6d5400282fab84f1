//! Plain and JSON dumps of the parser's event stream
//!
//! `events` prints one line per event: the event kind, then its payload. `events-json`
//! serializes the same stream as a JSON array, one object per event, tagged with an
//! `event` field.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::parse_to_events;
use crate::ir::events::{Event, ListMarker};

/// Render one event as a single line.
pub fn event_line(event: &Event) -> String {
    let kind = event.kind();
    match event {
        Event::Title { level, text } => format!("{kind} {level} {text:?}"),
        Event::Image { caption, url } => format!("{kind} {caption:?} {url:?}"),
        Event::TableRow { cells } => format!("{kind} {cells:?}"),
        Event::BeginCode {
            language: Some(language),
        } => format!("{kind} {language}"),
        Event::BeginList { marker } | Event::ListItem { marker } | Event::EndList { marker } => {
            format!("{kind} {}", marker_label(marker))
        }
        Event::EquationLine { text } | Event::CodeLine { text } | Event::Comment { text } => {
            format!("{kind} {text:?}")
        }
        Event::Text { line } => format!("{kind} {line:?}"),
        Event::Include { path } => format!("{kind} {path:?}"),
        _ => kind.to_string(),
    }
}

fn marker_label(marker: &ListMarker) -> String {
    match marker {
        ListMarker::Ordered => "ordered".to_string(),
        ListMarker::Bullet(c) => c.to_string(),
    }
}

/// One line per event
pub struct EventsFormat;

impl Format for EventsFormat {
    fn name(&self) -> &str {
        "events"
    }

    fn description(&self) -> &str {
        "Parser events, one per line"
    }

    fn file_extensions(&self) -> &[&str] {
        &["events"]
    }

    fn convert(&self, source: &str) -> Result<String, FormatError> {
        let mut out = String::new();
        for event in parse_to_events(source) {
            out.push_str(&event_line(&event));
            out.push('\n');
        }
        Ok(out)
    }
}

/// Parser events as a pretty-printed JSON array
pub struct EventsJsonFormat;

impl Format for EventsJsonFormat {
    fn name(&self) -> &str {
        "events-json"
    }

    fn description(&self) -> &str {
        "Parser events as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn convert(&self, source: &str) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&parse_to_events(source))
            .map_err(|e| FormatError::NotSupported(format!("JSON serialization failed: {e}")))
    }
}
