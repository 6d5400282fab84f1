//! Line patterns recognised by the markdown dialect.
//!
//! All patterns are anchored to a whole logical line (newline already stripped) unless
//! noted otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

/// Extension of documents that can be pulled in with an include bullet.
pub const SOURCE_EXTENSION: &str = "md";

pub const COMMENT_OPEN: &str = "<!--";
pub const COMMENT_CLOSE: &str = "-->";

/// A fully closed comment span, matched anywhere in the line.
pub static COMMENT_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--.*?-->").unwrap());

pub static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(#+)\s*(.+)$").unwrap());

pub static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*!\[([^\]]*)\]\(([^)]+)\)\s*$").unwrap());

pub static TABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\|([^|]+\|)+\s*$").unwrap());

/// One cell of a table row, matched repeatedly along the line.
pub static TABLE_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\|\s*([^|]*)").unwrap());

pub static TABLE_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*\|)+\s*-((\s|-)*\|)+\s*$").unwrap());

pub static EQUATION_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\$\$\s*$").unwrap());

/// Code fence with an optional language tag in group 1.
pub static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*```\s*([^\s`]*)\s*$").unwrap());

/// Indent, marker and item text.
pub static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\d+\.|[-*+])\s+(.*)$").unwrap());

/// Bullet whose link target is another source document; group 1 is the target without
/// its extension.
pub static INCLUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*[-*+]\s+\[[^\]]*\]\(([^)]+)\.{SOURCE_EXTENSION}\)\s*$"
    ))
    .unwrap()
});

/// Visual width of a run of leading whitespace. Tabs advance to the next multiple of four.
pub fn indent_width(indent: &str) -> usize {
    indent.chars().fold(0, |width, c| match c {
        '\t' => width + 4 - width % 4,
        _ => width + 1,
    })
}
