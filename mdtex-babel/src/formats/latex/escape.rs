//! Inline markup and escaping for text lines.
//!
//! Text goes through three nested levels:
//!
//! 1. split on inline math (`$$...$$`); math is emitted as `$...$` with no escaping
//! 2. split the remaining spans on bold (`**...**`), wrapping bold content in `\textbf{}`
//! 3. escape reserved characters, turn doubled backslashes into `\textbackslash{}`, then
//!    rewrite `[cite@a,b]` / `[ref@k]` into `\cite{a,b}` / `\ref{k}`
//!
//! Empty or whitespace-only math and bold spans produce nothing. Whitespace-only plain spans
//! are copied as they are.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static INLINE_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\$(.+?)\$\$").unwrap());

/// Opening marker must not be followed by whitespace.
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(\S.*?)\*\*").unwrap());

static RESERVED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[&%$_{}]").unwrap());

static ESCAPED_RESERVED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([&%$_{}])").unwrap());

static CITATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(cite|ref)@([^\]]+)\]").unwrap());

const MATH_DELIMITER: &str = "$$";
const BOLD_DELIMITER: &str = "**";

/// Convert one line of user-visible text to LaTeX.
pub fn convert_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for math in INLINE_MATH.find_iter(text) {
        push_styled(&mut out, &text[last..math.start()]);
        let inner = strip_delimiters(math.as_str(), MATH_DELIMITER);
        if !inner.trim().is_empty() {
            out.push('$');
            out.push_str(inner);
            out.push('$');
        }
        last = math.end();
    }
    push_styled(&mut out, &text[last..]);
    out
}

/// Escape reserved characters and rewrite citations in a span without any other markup.
pub fn escape(span: &str) -> String {
    let escaped = RESERVED.replace_all(span, |caps: &Captures| format!("\\{}", &caps[0]));
    // runs after the reserved pass, so a source `\%` becomes `\textbackslash{}%` and the
    // bare `%` comments out the rest of the LaTeX line
    let escaped = escaped.replace("\\\\", "\\textbackslash{}");
    CITATION
        .replace_all(&escaped, |caps: &Captures| {
            let keys = ESCAPED_RESERVED.replace_all(&caps[2], "$1");
            let keys: Vec<&str> = keys
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .collect();
            if keys.is_empty() {
                return caps[0].to_string();
            }
            format!("\\{}{{{}}}", &caps[1], keys.join(","))
        })
        .into_owned()
}

fn push_styled(out: &mut String, span: &str) {
    if span.trim().is_empty() {
        out.push_str(span);
        return;
    }
    let mut last = 0;
    for bold in BOLD.find_iter(span) {
        push_escaped(out, &span[last..bold.start()]);
        let inner = strip_delimiters(bold.as_str(), BOLD_DELIMITER);
        if !inner.trim().is_empty() {
            out.push_str("\\textbf{");
            push_escaped(out, inner);
            out.push('}');
        }
        last = bold.end();
    }
    push_escaped(out, &span[last..]);
}

fn push_escaped(out: &mut String, span: &str) {
    if span.trim().is_empty() {
        out.push_str(span);
    } else {
        out.push_str(&escape(span));
    }
}

fn strip_delimiters<'a>(span: &'a str, delimiter: &str) -> &'a str {
    span.strip_prefix(delimiter)
        .and_then(|inner| inner.strip_suffix(delimiter))
        .unwrap_or(span)
}
