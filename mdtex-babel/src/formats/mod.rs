//! Format implementations
//!
//! `markdown` is the only input side; everything else consumes its event stream.

pub mod events;
pub mod latex;
pub mod markdown;
pub mod tag;

pub use events::{EventsFormat, EventsJsonFormat};
pub use latex::LatexFormat;
pub use tag::TagFormat;
