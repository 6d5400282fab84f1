//! Markdown to LaTeX conversion
//!
//!     This crate turns a deliberately small markdown dialect into LaTeX source. It is the
//!     library behind the mdtex CLI and is shell agnostic: no code here prints, reads env vars
//!     or touches the filesystem.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── bib.rs                  # Redundant BibTeX entry detection
//!     ├── transforms.rs           # String in, string out helpers
//!     ├── ir
//!     │   └── events.rs           # The event vocabulary and the EventSink trait
//!     ├── formats
//!     │   ├── markdown            # Line classifier: source → events
//!     │   ├── latex               # Renderer: events → LaTeX, escaping, directives
//!     │   ├── tag                 # XML-like dump of the events
//!     │   └── events              # Plain and JSON dumps of the events
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common
//!     ├── parser
//!     ├── latex
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithm
//!
//!     Conversion is a single pass over the source lines. The markdown parser classifies each
//!     line, keeping one piece of state (are we in a table, comment, equation or code block)
//!     plus a stack of open list levels, and emits flat events to a sink. Begin/end events are
//!     always balanced and well nested once the parser is finished, so sinks never need a stack
//!     of their own.
//!
//!     The LaTeX renderer is such a sink. Everything it writes is decided by the event at hand,
//!     the options it was built with, and directives picked up from `<!-- set key="value" -->`
//!     comments. A directive is consumed by the next table, image or equation and gone after
//!     that; whatever that construct did not use is discarded with it.
//!
//! Formats
//!
//!     Every output is a [`Format`]: LaTeX, plus the inspect views of the event stream that are
//!     handy when a document renders unexpectedly. The [`FormatRegistry`] looks them up by name
//!     or by output file extension.
//!
pub mod bib;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;
pub mod transforms;

pub use error::FormatError;
pub use format::Format;
pub use formats::latex::{render, RenderOptions, TopLevel};
pub use formats::markdown::{parse_to_events, Parser};
pub use ir::events::{Event, EventSink, ListMarker};
pub use registry::FormatRegistry;
