//! The markdown dialect accepted by mdtex
//!
//! This is not CommonMark. It is a small, line-oriented dialect in which every construct is
//! recognisable from a single line plus the parser's current state:
//!
//! | Construct        | Syntax                                  | Events                                         |
//! |------------------|-----------------------------------------|------------------------------------------------|
//! | Title            | `## Heading`                            | `Title`                                        |
//! | Image            | `![caption](path.png)` alone on a line  | `Image`                                        |
//! | Table            | `\| a \| b \|` rows, `\|---\|` rules    | `BeginTable`, `TableRow`/`TableRule`, `EndTable` |
//! | Display equation | `$$` fence lines                        | `BeginEquation`, `EquationLine`, `EndEquation` |
//! | Code block       | ```` ```lang ```` fence lines           | `BeginCode`, `CodeLine`, `EndCode`             |
//! | List             | `- item`, `* item`, `+ item`, `1. item` | `BeginList`, `ListItem` + `Text`, `EndList`    |
//! | Include          | `* [title](other.md)`                   | `Include`                                      |
//! | Comment          | `<!-- ... -->`, possibly multi-line     | `Comment` per line or span                     |
//! | Text             | anything else                           | `Text`                                         |
//!
//! Inline markup (bold, inline math, citations) is left inside `Text` events untouched; it
//! is the renderer's job.
//!
//! List nesting is decided by indentation alone. A blank line closes every open list.

pub mod parser;
pub mod patterns;

pub use parser::{parse_to_events, ListFrame, ParseState, Parser};
