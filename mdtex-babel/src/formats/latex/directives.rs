//! Directives smuggled through comments.
//!
//! `<!-- set caption="Results" label="tab:results" -->` stores key/value pairs that the next
//! table, image or equation consumes. Each consuming construct takes the keys it knows and
//! the rest of the store is discarded, so a directive never outlives one construct.
//!
//! `<!-- latex` on its own opens a literal passthrough block; the first later comment line
//! containing `-->` closes it.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static SET_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^<!--\s*set(\s+\w+="[^"]+")+\s*-->$"#).unwrap());

static DIRECTIVE_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(\w+)="([^"]+)""#).unwrap());

static RAW_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<!--\s*latex\s*$").unwrap());

/// Start of anything that looks like it wanted to be a directive.
static DIRECTIVE_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<!--\s*set\b").unwrap());

pub const RAW_CLOSE: &str = "-->";

/// Placement token all spellings of "here" collapse to.
pub const HERE: &str = "!h";

/// Key/value hints waiting for the next consuming construct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveStore {
    values: HashMap<String, String>,
}

impl DirectiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Remove and return a key.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Remove and return a key, falling back to `default` when it was never set.
    pub fn take_or(&mut self, key: &str, default: &str) -> String {
        self.take(key).unwrap_or_else(|| default.to_string())
    }

    /// Drop every remaining key, returning the discarded key names (sorted).
    pub fn reset(&mut self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.drain().map(|(key, _)| key).collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Store every pair of a `set` directive. Returns false, leaving the store untouched,
    /// when the comment is not a well-formed directive.
    pub fn apply(&mut self, comment: &str) -> bool {
        match parse_directive(comment) {
            Some(pairs) => {
                for (key, value) in pairs {
                    self.set(key, value);
                }
                true
            }
            None => false,
        }
    }
}

/// Parse `<!-- set k="v" ... -->` into its pairs, in source order.
pub fn parse_directive(comment: &str) -> Option<Vec<(String, String)>> {
    let comment = comment.trim();
    if !SET_DIRECTIVE.is_match(comment) {
        return None;
    }
    Some(
        DIRECTIVE_PAIR
            .captures_iter(comment)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect(),
    )
}

/// True for a comment that starts like a directive but does not parse as one.
pub fn is_malformed_directive(comment: &str) -> bool {
    let comment = comment.trim();
    DIRECTIVE_LIKE.is_match(comment) && !SET_DIRECTIVE.is_match(comment)
}

pub fn is_raw_open(comment: &str) -> bool {
    RAW_OPEN.is_match(comment.trim_end())
}

/// Canonical float placement. Only the two spellings of "here" are rewritten.
pub fn normalize_float(float: String) -> String {
    match float.as_str() {
        "h" | HERE => HERE.to_string(),
        _ => float,
    }
}
