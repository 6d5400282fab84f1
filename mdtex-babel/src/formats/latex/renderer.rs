//! LaTeX rendering (event stream → LaTeX source)
//!
//! The renderer is an [`EventSink`]: every event is turned into zero or more output lines as
//! soon as it arrives. It keeps no block stack; nesting comes for free from the parser's
//! well-nested stream. Its only state is the directive store, the raw passthrough flag and
//! the output buffer.

use super::directives::{self, normalize_float, DirectiveStore};
use super::escape::convert_text;
use super::{RenderOptions, TopLevel};
use crate::ir::events::{Event, EventSink, ListMarker};

const HEADINGS: [&str; 6] = [
    "chapter",
    "section",
    "subsection",
    "subsubsection",
    "paragraph",
    "subparagraph",
];

pub struct Renderer {
    options: RenderOptions,
    directives: DirectiveStore,
    raw: bool,
    out: String,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Renderer {
            options,
            directives: DirectiveStore::new(),
            raw: false,
            out: String::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn directives(&self) -> &DirectiveStore {
        &self.directives
    }

    /// Whether a literal passthrough block is open.
    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_output(self) -> String {
        self.out
    }

    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::Title { level, text } => self.on_title(level, &text),
            Event::Image { caption, url } => self.on_image(caption, &url),
            Event::BeginTable => self.on_begin_table(),
            Event::TableRule => self.line("\\hline"),
            Event::TableRow { cells } => self.on_table_row(&cells),
            Event::EndTable => {
                self.line("\\hline");
                self.line("\\end{tabular}");
                self.line("\\end{table}");
            }
            Event::BeginEquation => self.on_begin_equation(),
            Event::EquationLine { text } | Event::CodeLine { text } => self.line(&text),
            Event::EndEquation => self.line("\\end{equation}"),
            Event::BeginCode { language } => match language {
                Some(language) => self.line(&format!("\\begin{{lstlisting}}[language={language}]")),
                None => self.line("\\begin{lstlisting}"),
            },
            Event::EndCode => self.line("\\end{lstlisting}"),
            Event::BeginList { marker } => {
                self.line(&format!("\\begin{{{}}}", list_environment(marker)))
            }
            // the item text arrives next and completes this line
            Event::ListItem { .. } => self.out.push_str("\\item "),
            Event::EndList { marker } => self.line(&format!("\\end{{{}}}", list_environment(marker))),
            Event::Text { line } => self.line(&convert_text(&line)),
            Event::Comment { text } => self.on_comment(&text),
            Event::Include { path } => self.line(&format!(
                "\\input{{{path}.{}}}",
                self.options.include_extension
            )),
        }
    }

    fn line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn label(&mut self, label: Option<String>) {
        if let Some(label) = label {
            self.line(&format!("\\label{{{label}}}"));
        }
    }

    fn take_float(&mut self) -> String {
        normalize_float(self.directives.take_or("float", &self.options.float))
    }

    /// Drop whatever the consuming construct did not use.
    fn reset_directives(&mut self) {
        let leftover = self.directives.reset();
        if !leftover.is_empty() {
            log::debug!("discarding unused directives: {}", leftover.join(", "));
        }
    }

    fn on_title(&mut self, level: usize, text: &str) {
        let first = match self.options.top_level {
            TopLevel::Chapter => 0,
            TopLevel::Section => 1,
        };
        let index = (first + level.saturating_sub(1)).min(HEADINGS.len() - 1);
        self.line(&format!("\\{}{{{}}}", HEADINGS[index], convert_text(text)));
    }

    fn on_image(&mut self, caption: String, url: &str) {
        let caption = self.directives.take("caption").unwrap_or(caption);
        let float = self.take_float();
        let width = self
            .directives
            .take_or("width", &self.options.image_width);
        let label = self.directives.take("label");
        self.reset_directives();

        self.line(&format!("\\begin{{figure}}[{float}]"));
        self.line("\\centering");
        self.line(&format!(
            "\\includegraphics[width={width}\\linewidth]{{{url}}}"
        ));
        self.line(&format!("\\caption{{{}}}", convert_text(&caption)));
        self.label(label);
        self.line("\\end{figure}");
    }

    fn on_begin_table(&mut self) {
        let caption = self.directives.take_or("caption", "");
        let float = self.take_float();
        let columns = self
            .directives
            .take_or("columns", &self.options.table_columns);
        let label = self.directives.take("label");
        self.reset_directives();

        self.line(&format!("\\begin{{table}}[{float}]"));
        self.line(&format!("\\caption{{{}}}", convert_text(&caption)));
        self.label(label);
        self.line("\\centering");
        self.line(&format!("\\begin{{tabular}}{{{columns}}}"));
        self.line("\\hline");
    }

    fn on_table_row(&mut self, cells: &[String]) {
        let row: Vec<String> = cells.iter().map(|cell| convert_text(cell)).collect();
        self.line(&format!("{} \\\\", row.join(" & ")));
    }

    fn on_begin_equation(&mut self) {
        let label = self.directives.take("label");
        self.reset_directives();

        self.line("\\begin{equation}");
        self.label(label);
    }

    fn on_comment(&mut self, text: &str) {
        if directives::is_raw_open(text) {
            log::debug!("entering literal passthrough");
            self.raw = true;
            return;
        }
        if self.raw {
            if text.contains(directives::RAW_CLOSE) {
                log::debug!("leaving literal passthrough");
                self.raw = false;
            } else {
                self.line(text);
            }
            return;
        }
        if self.directives.apply(text) {
            return;
        }
        if directives::is_malformed_directive(text) {
            log::debug!("not a valid directive, keeping as comment: {text:?}");
        }
        if self.options.keep_comments {
            let body = comment_body(text);
            if !body.is_empty() {
                self.line(&format!("% {body}"));
            }
        }
    }
}

impl EventSink for Renderer {
    fn handle(&mut self, event: Event) {
        self.dispatch(event);
    }
}

fn list_environment(marker: ListMarker) -> &'static str {
    if marker.is_ordered() {
        "enumerate"
    } else {
        "itemize"
    }
}

fn comment_body(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix("<!--").unwrap_or(text);
    let text = text.strip_suffix("-->").unwrap_or(text);
    text.trim()
}
