//! Redundant BibTeX entry detection
//!
//! Entries are recognised by their opening line only (`@article{key,`); fields, bodies and
//! anything spread over several lines are ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static ENTRY_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@\s*\w+\s*\{\s*(\w+)\s*,\s*$").unwrap());

/// Tracks the keys seen so far in one bibliography.
#[derive(Debug, Default)]
pub struct BibChecker {
    entries: HashSet<String>,
}

impl BibChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the entry opened on `line`, if any.
    ///
    /// Returns the key when it was already registered.
    pub fn check_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim_end_matches(['\n', '\r']);
        let key = ENTRY_OPEN.captures(line)?[1].to_string();
        if self.entries.contains(&key) {
            log::debug!("duplicate bibliography key {key}");
            Some(key)
        } else {
            self.entries.insert(key);
            None
        }
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every repeated key in `source`, once per repeated occurrence, in source order.
pub fn find_duplicates(source: &str) -> Vec<String> {
    let mut checker = BibChecker::new();
    source
        .lines()
        .filter_map(|line| checker.check_line(line))
        .collect()
}
