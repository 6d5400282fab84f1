//! Defines the flat event stream exchanged between the parser and its sinks.

use serde::Serialize;

/// The marker that opened a list or introduced a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListMarker {
    /// A decimal number followed by a dot (`1.`, `12.`).
    Ordered,
    /// One of the unordered bullet characters (`-`, `*`, `+`).
    Bullet(char),
}

impl ListMarker {
    /// Classify a raw marker as it appears in the source line.
    pub fn from_source(marker: &str) -> Self {
        match marker.chars().next() {
            Some(c) if c.is_ascii_digit() => ListMarker::Ordered,
            Some(c) => ListMarker::Bullet(c),
            None => ListMarker::Bullet('-'),
        }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, ListMarker::Ordered)
    }
}

/// Represents a single event in the document stream.
///
/// Begin/end pairs are always balanced and well nested once the parser has been
/// finished; sinks can rely on that and keep no stack of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    Title {
        level: usize,
        text: String,
    },
    Image {
        caption: String,
        url: String,
    },
    BeginTable,
    /// A separator line made of pipes and dashes.
    TableRule,
    TableRow {
        cells: Vec<String>,
    },
    EndTable,
    BeginEquation,
    EquationLine {
        text: String,
    },
    EndEquation,
    BeginCode {
        language: Option<String>,
    },
    CodeLine {
        text: String,
    },
    EndCode,
    BeginList {
        marker: ListMarker,
    },
    ListItem {
        marker: ListMarker,
    },
    EndList {
        marker: ListMarker,
    },
    Text {
        line: String,
    },
    /// A comment span, including its `<!--` / `-->` markers when they were on this line.
    Comment {
        text: String,
    },
    /// A document include; the path has its source extension stripped.
    Include {
        path: String,
    },
}

impl Event {
    /// Short kebab-case name of the variant, used by the inspect formats.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Title { .. } => "title",
            Event::Image { .. } => "image",
            Event::BeginTable => "begin-table",
            Event::TableRule => "table-rule",
            Event::TableRow { .. } => "table-row",
            Event::EndTable => "end-table",
            Event::BeginEquation => "begin-equation",
            Event::EquationLine { .. } => "equation-line",
            Event::EndEquation => "end-equation",
            Event::BeginCode { .. } => "begin-code",
            Event::CodeLine { .. } => "code-line",
            Event::EndCode => "end-code",
            Event::BeginList { .. } => "begin-list",
            Event::ListItem { .. } => "list-item",
            Event::EndList { .. } => "end-list",
            Event::Text { .. } => "text",
            Event::Comment { .. } => "comment",
            Event::Include { .. } => "include",
        }
    }
}

/// Consumer of the parser's event stream.
///
/// Events arrive synchronously, in source order, each one fully handled before the next
/// line is classified.
pub trait EventSink {
    fn handle(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn handle(&mut self, event: Event) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn handle(&mut self, event: Event) {
        (**self).handle(event);
    }
}
