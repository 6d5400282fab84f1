//! Property-based tests for the parser and renderer
//!
//! Documents are assembled from the line shapes the dialect knows about, mixed with
//! arbitrary printable noise, so that every state transition gets exercised.

use crate::common::assert_well_nested;
use mdtex_babel::formats::latex::{render, RenderOptions};
use mdtex_babel::formats::markdown::parse_to_events;
use proptest::prelude::*;

/// Generate an indentation prefix
fn indent_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "",
        "  ",
        "    ",
        "\t",
        prop::collection::vec(prop_oneof![" ", "\t"], 1..6).prop_map(|parts| parts.join("")),
    ]
}

/// Generate a line of some recognised construct
fn construct_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "#{1,8} [a-zA-Z ]+",
        (indent_strategy(), "[-*+]|[0-9]{1,2}\\.", "[a-zA-Z *$]*")
            .prop_map(|(indent, marker, text)| format!("{indent}{marker} {text}")),
        "\\|( [a-z0-9%&]* \\|){1,4}",
        "\\|(-+\\|){1,4}",
        Just("$$".to_string()),
        "```[a-z]{0,6}",
        "!\\[[a-z ]*\\]\\([a-z/]+\\.png\\)",
        "\\* \\[[a-z]+\\]\\([a-z]+\\.md\\)",
        "<!-- set (caption|label|float|width|columns)=\"[a-z:!]+\" -->",
        "<!-- [a-z ]*",
        "[a-z ]*-->[a-z |]*",
        "<!-- latex",
        Just(String::new()),
    ]
}

/// Generate a document mixing constructs with arbitrary printable lines
fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => construct_strategy(),
            1 => "[ -~]{0,30}",
        ],
        0..40,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_events_always_well_nested(input in document_strategy()) {
        assert_well_nested(&parse_to_events(&input));
    }

    #[test]
    fn test_render_never_panics(input in "\\PC*") {
        let _latex = render(&input, &RenderOptions::default());
    }

    #[test]
    fn test_rendered_environments_balanced(input in document_strategy()) {
        let latex = render(&input, &RenderOptions::default());
        for env in ["table", "tabular", "equation", "lstlisting", "itemize", "enumerate", "figure"] {
            let opened = latex.lines().filter(|l| l.starts_with(&format!("\\begin{{{env}}}"))).count();
            let closed = latex.lines().filter(|l| *l == format!("\\end{{{env}}}")).count();
            prop_assert_eq!(opened, closed, "unbalanced {} in:\n{}", env, latex);
        }
    }

    #[test]
    fn test_code_lines_are_not_lost(body in prop::collection::vec("[ -~]{0,20}", 0..10)) {
        let body: Vec<String> = body.into_iter().filter(|l| !l.trim_start().starts_with("```")).collect();
        let source: String = std::iter::once("```")
            .chain(body.iter().map(String::as_str))
            .map(|line| format!("{line}\n"))
            .collect();
        let events = parse_to_events(&source);
        let code_lines = events.iter().filter(|e| e.kind() == "code-line").count();
        let end_codes = events.iter().filter(|e| e.kind() == "end-code").count();
        prop_assert_eq!(code_lines, body.len());
        prop_assert_eq!(end_codes, 1);
    }
}
