//! Markdown parsing (dialect → event stream)
//!
//! A single-pass, line-oriented classifier. The parser keeps exactly one [`ParseState`] and a
//! stack of open list frames; everything else is decided from the current line alone.
//! Classification is tried in a fixed order and the first match wins:
//!
//! 1. comment continuation (state is `Comment`)
//! 2. body lines of an open equation or code block
//! 3. comment opening (`<!--` anywhere on the line)
//! 4. blank line
//! 5. include bullet, equation fence, code fence, title, image, table, list item
//! 6. plain text
//!
//! Malformed input is never an error: unterminated constructs are closed by
//! [`Parser::finish`] and anything unrecognised degrades to plain text.

use super::patterns::{
    indent_width, CODE_FENCE, COMMENT_CLOSE, COMMENT_OPEN, COMMENT_SPAN, EQUATION_FENCE, IMAGE,
    INCLUDE, LIST_ITEM, TABLE, TABLE_CELL, TABLE_RULE, TITLE,
};
use crate::ir::events::{Event, EventSink, ListMarker};

/// The multi-line construct the parser is currently inside of.
///
/// Entering or leaving `Table`, `Equation` or `Code` always produces a begin/end event;
/// `Text` is the quiescent state and produces none. `Comment` suspends normal
/// classification until a closing marker is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    #[default]
    Text,
    Table,
    Comment,
    Equation,
    Code,
}

/// One open list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    pub marker: ListMarker,
    pub depth: usize,
}

/// Line-oriented parser feeding an [`EventSink`].
///
/// # Examples
///
/// ```ignore
/// let mut parser = Parser::new(Vec::new());
/// parser.feed("# Title");
/// parser.feed("- item");
/// parser.finish();
/// let events = parser.into_sink();
/// ```
pub struct Parser<S: EventSink> {
    state: ParseState,
    lists: Vec<ListFrame>,
    sink: S,
}

impl<S: EventSink> Parser<S> {
    pub fn new(sink: S) -> Self {
        Parser {
            state: ParseState::Text,
            lists: Vec::new(),
            sink,
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Currently open list frames, outermost first.
    pub fn open_lists(&self) -> &[ListFrame] {
        &self.lists
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Feed a whole text blob, then flush.
    pub fn parse_str(&mut self, source: &str) {
        for line in source.lines() {
            self.feed(line);
        }
        self.finish();
    }

    /// Consume one logical line. Trailing newline characters are ignored.
    pub fn feed(&mut self, line: &str) {
        let line = line.trim_end_matches(['\n', '\r']);
        log::trace!("{:?} <- {line:?}", self.state);

        if self.try_end_comment(line) {
            return;
        }
        if self.try_block_body(line) {
            return;
        }
        if self.try_comment(line) {
            return;
        }
        self.parse_line_commentless(line);
    }

    /// Close every construct still open at end of input.
    ///
    /// Unterminated comments are dropped back to text, unterminated tables, equations and
    /// code blocks get their end event, and all list frames are closed innermost first.
    pub fn finish(&mut self) {
        match self.state {
            ParseState::Comment => {
                log::debug!("unterminated comment at end of input");
                self.state = ParseState::Text;
            }
            ParseState::Equation | ParseState::Code => {
                log::debug!("closing unterminated {:?} block at end of input", self.state);
            }
            ParseState::Text | ParseState::Table => {}
        }
        self.set_state(ParseState::Text);
        self.close_lists();
    }

    fn emit(&mut self, event: Event) {
        self.sink.handle(event);
    }

    fn set_state(&mut self, next: ParseState) {
        if next == self.state {
            return;
        }
        match self.state {
            ParseState::Table => self.emit(Event::EndTable),
            ParseState::Equation => self.emit(Event::EndEquation),
            ParseState::Code => self.emit(Event::EndCode),
            ParseState::Text | ParseState::Comment => {}
        }
        match next {
            ParseState::Table => self.emit(Event::BeginTable),
            ParseState::Equation => self.emit(Event::BeginEquation),
            // code blocks carry a language and are opened by `open_code`
            ParseState::Code | ParseState::Text | ParseState::Comment => {}
        }
        self.state = next;
    }

    fn open_code(&mut self, language: Option<String>) {
        self.set_state(ParseState::Text);
        self.emit(Event::BeginCode { language });
        self.state = ParseState::Code;
    }

    fn try_end_comment(&mut self, line: &str) -> bool {
        if self.state != ParseState::Comment {
            return false;
        }
        match line.find(COMMENT_CLOSE) {
            None => self.emit(Event::Comment {
                text: line.to_string(),
            }),
            Some(pos) => {
                let end = pos + COMMENT_CLOSE.len();
                self.emit(Event::Comment {
                    text: line[..end].to_string(),
                });
                self.set_state(ParseState::Text);
                let rest = &line[end..];
                if !rest.trim().is_empty() {
                    debug_assert!(rest.len() < line.len());
                    self.feed(rest);
                }
            }
        }
        true
    }

    /// Body and closing fence of equation and code blocks. Their content is opaque, so
    /// comments, blank lines and list markers inside them are not interpreted. A fence
    /// followed by closed comment spans still closes the block; the spans are emitted after
    /// the end event.
    fn try_block_body(&mut self, line: &str) -> bool {
        match self.state {
            ParseState::Equation | ParseState::Code => {}
            _ => return false,
        }

        let (mut bare, spans, tail) = split_closed_comments(line);
        bare.push_str(tail);
        let closes = match self.state {
            ParseState::Equation => EQUATION_FENCE.is_match(&bare),
            _ => CODE_FENCE
                .captures(&bare)
                .is_some_and(|caps| caps[1].is_empty()),
        };

        if closes {
            self.set_state(ParseState::Text);
            for text in spans {
                self.emit(Event::Comment { text });
            }
        } else if self.state == ParseState::Equation {
            self.emit(Event::EquationLine {
                text: line.to_string(),
            });
        } else {
            self.emit(Event::CodeLine {
                text: line.to_string(),
            });
        }
        true
    }

    fn try_comment(&mut self, line: &str) -> bool {
        if !line.contains(COMMENT_OPEN) {
            return false;
        }

        let (mut residue, spans, tail) = split_closed_comments(line);

        // an opener without a closer can only follow the last closed span
        let unclosed = match tail.find(COMMENT_OPEN) {
            Some(pos) => {
                residue.push_str(&tail[..pos]);
                Some(tail[pos..].to_string())
            }
            None => {
                residue.push_str(tail);
                None
            }
        };

        if !residue.trim().is_empty() {
            debug_assert!(residue.len() < line.len());
            self.parse_line_commentless(&residue);
        }
        for text in spans {
            self.emit(Event::Comment { text });
        }
        if let Some(text) = unclosed {
            self.set_state(ParseState::Comment);
            self.emit(Event::Comment { text });
        }
        true
    }

    fn parse_line_commentless(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.set_state(ParseState::Text);
            self.close_lists();
            self.emit(Event::Text {
                line: String::new(),
            });
            return;
        }
        if self.try_include(line) {
            return;
        }
        if self.try_equation_fence(line) {
            return;
        }
        if self.try_code_fence(line) {
            return;
        }
        if self.try_title(line) {
            return;
        }
        if self.try_image(line) {
            return;
        }
        if self.try_table(line) {
            return;
        }
        if self.try_list_item(line) {
            return;
        }
        self.parse_text(line);
    }

    fn try_include(&mut self, line: &str) -> bool {
        let Some(caps) = INCLUDE.captures(line) else {
            return false;
        };
        self.set_state(ParseState::Text);
        self.emit(Event::Include {
            path: caps[1].to_string(),
        });
        true
    }

    fn try_equation_fence(&mut self, line: &str) -> bool {
        if !EQUATION_FENCE.is_match(line) {
            return false;
        }
        self.set_state(ParseState::Equation);
        true
    }

    fn try_code_fence(&mut self, line: &str) -> bool {
        let Some(caps) = CODE_FENCE.captures(line) else {
            return false;
        };
        let language = Some(caps[1].to_string()).filter(|lang| !lang.is_empty());
        self.open_code(language);
        true
    }

    fn try_title(&mut self, line: &str) -> bool {
        let Some(caps) = TITLE.captures(line) else {
            return false;
        };
        self.set_state(ParseState::Text);
        self.emit(Event::Title {
            level: caps[1].len(),
            text: caps[2].trim_end().to_string(),
        });
        true
    }

    fn try_image(&mut self, line: &str) -> bool {
        let Some(caps) = IMAGE.captures(line) else {
            return false;
        };
        self.set_state(ParseState::Text);
        self.emit(Event::Image {
            caption: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        true
    }

    fn try_table(&mut self, line: &str) -> bool {
        if !TABLE.is_match(line) {
            return false;
        }
        self.set_state(ParseState::Table);
        if TABLE_RULE.is_match(line) {
            self.emit(Event::TableRule);
        } else {
            let mut cells: Vec<String> = TABLE_CELL
                .captures_iter(line)
                .map(|caps| caps[1].trim_end().to_string())
                .collect();
            // the terminating pipe yields one empty trailing cell
            cells.pop();
            self.emit(Event::TableRow { cells });
        }
        true
    }

    fn try_list_item(&mut self, line: &str) -> bool {
        let Some(caps) = LIST_ITEM.captures(line) else {
            return false;
        };
        let depth = indent_width(&caps[1]);
        let marker = ListMarker::from_source(&caps[2]);
        let text = caps[3].to_string();

        self.set_state(ParseState::Text);
        self.enter_list(marker, depth);
        self.emit(Event::ListItem { marker });
        self.emit(Event::Text { line: text });
        true
    }

    /// Pop frames deeper than `depth`, then open a new frame if the item is still deeper
    /// than the innermost remaining one.
    fn enter_list(&mut self, marker: ListMarker, depth: usize) {
        while self.lists.last().is_some_and(|top| top.depth > depth) {
            if let Some(frame) = self.lists.pop() {
                self.emit(Event::EndList {
                    marker: frame.marker,
                });
            }
        }
        if self.lists.last().map_or(true, |top| depth > top.depth) {
            self.lists.push(ListFrame { marker, depth });
            self.emit(Event::BeginList { marker });
        }
    }

    fn close_lists(&mut self) {
        while let Some(frame) = self.lists.pop() {
            self.emit(Event::EndList {
                marker: frame.marker,
            });
        }
    }

    fn parse_text(&mut self, line: &str) {
        self.set_state(ParseState::Text);
        self.emit(Event::Text {
            line: line.to_string(),
        });
    }
}

/// Separate the closed comment spans of a line from the text between them. The text after
/// the last span is returned on its own, untouched.
fn split_closed_comments(line: &str) -> (String, Vec<String>, &str) {
    let mut between = String::new();
    let mut spans = Vec::new();
    let mut last_end = 0;
    for span in COMMENT_SPAN.find_iter(line) {
        between.push_str(&line[last_end..span.start()]);
        spans.push(span.as_str().to_string());
        last_end = span.end();
    }
    (between, spans, &line[last_end..])
}

/// Parse a whole document into its event stream.
pub fn parse_to_events(source: &str) -> Vec<Event> {
    let mut parser = Parser::new(Vec::new());
    parser.parse_str(source);
    parser.into_sink()
}
