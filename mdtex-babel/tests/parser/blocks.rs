use crate::common::{assert_well_nested, kinds};
use mdtex_babel::formats::markdown::{parse_to_events, ParseState, Parser};
use mdtex_babel::ir::events::Event;

fn row(cells: &[&str]) -> Event {
    Event::TableRow {
        cells: cells.iter().map(|c| c.to_string()).collect(),
    }
}

#[test]
fn test_two_by_two_table() {
    let events = parse_to_events("| h1 | h2 |\n|----|----|\n| a | b |\n");
    assert_eq!(
        events,
        vec![
            Event::BeginTable,
            row(&["h1", "h2"]),
            Event::TableRule,
            row(&["a", "b"]),
            Event::EndTable,
        ]
    );
}

#[test]
fn test_text_line_closes_table() {
    let events = parse_to_events("| a |\nafter");
    assert_eq!(kinds(&events), vec!["begin-table", "table-row", "end-table", "text"]);
}

#[test]
fn test_unterminated_code_block() {
    let mut parser = Parser::new(Vec::new());
    parser.parse_str("```c\nint x;\n\n<!-- kept -->\n- not a list");
    assert_eq!(parser.state(), ParseState::Text);
    let events = parser.into_sink();
    assert_eq!(
        events,
        vec![
            Event::BeginCode {
                language: Some("c".to_string())
            },
            Event::CodeLine {
                text: "int x;".to_string()
            },
            Event::CodeLine {
                text: String::new()
            },
            Event::CodeLine {
                text: "<!-- kept -->".to_string()
            },
            Event::CodeLine {
                text: "- not a list".to_string()
            },
            Event::EndCode,
        ]
    );
}

#[test]
fn test_fence_with_language_inside_code_is_content() {
    let events = parse_to_events("```\n```rust\n```");
    assert_eq!(
        kinds(&events),
        vec!["begin-code", "code-line", "end-code"]
    );
}

#[test]
fn test_equation_body_verbatim() {
    let events = parse_to_events("$$\na_1 & b \\\\\n$$\n");
    assert_eq!(
        events,
        vec![
            Event::BeginEquation,
            Event::EquationLine {
                text: "a_1 & b \\\\".to_string()
            },
            Event::EndEquation,
        ]
    );
}

#[test]
fn test_comment_spanning_lines_then_content() {
    let events = parse_to_events("<!-- one\ntwo\nthree --> # Title");
    assert_eq!(
        events,
        vec![
            Event::Comment {
                text: "<!-- one".to_string()
            },
            Event::Comment {
                text: "two".to_string()
            },
            Event::Comment {
                text: "three -->".to_string()
            },
            Event::Title {
                level: 1,
                text: "Title".to_string()
            },
        ]
    );
}

#[test]
fn test_residue_classified_before_comments() {
    let events = parse_to_events("| a | <!-- note --> b |");
    assert_eq!(
        events,
        vec![
            Event::BeginTable,
            row(&["a", "b"]),
            Event::Comment {
                text: "<!-- note -->".to_string()
            },
            Event::EndTable,
        ]
    );
}

#[test]
fn test_unterminated_comment_is_dropped_at_finish() {
    let mut parser = Parser::new(Vec::new());
    parser.feed("<!-- open");
    assert_eq!(parser.state(), ParseState::Comment);
    parser.finish();
    assert_eq!(parser.state(), ParseState::Text);
    assert_well_nested(parser.sink());
}

#[test]
fn test_include_and_image() {
    let events = parse_to_events("* [Methods](chapters/methods.md)\n![Setup](img/setup.png)");
    assert_eq!(
        events,
        vec![
            Event::Include {
                path: "chapters/methods".to_string()
            },
            Event::Image {
                caption: "Setup".to_string(),
                url: "img/setup.png".to_string()
            },
        ]
    );
}

#[test]
fn test_link_to_other_file_is_a_list_item() {
    let events = parse_to_events("* [Site](index.html)");
    assert_eq!(kinds(&events), vec!["begin-list", "list-item", "text", "end-list"]);
}

#[test]
fn test_crlf_lines() {
    let events = parse_to_events("# A\r\n| x |\r\n");
    assert_eq!(
        events,
        vec![
            Event::Title {
                level: 1,
                text: "A".to_string()
            },
            Event::BeginTable,
            row(&["x"]),
            Event::EndTable,
        ]
    );
}

#[test]
fn test_code_fence_with_trailing_comment_closes_block() {
    let events = parse_to_events("```\nx\n``` <!-- done -->\n# After");
    assert_eq!(
        events,
        vec![
            Event::BeginCode { language: None },
            Event::CodeLine {
                text: "x".to_string()
            },
            Event::EndCode,
            Event::Comment {
                text: "<!-- done -->".to_string()
            },
            Event::Title {
                level: 1,
                text: "After".to_string()
            },
        ]
    );
}

#[test]
fn test_equation_fence_with_trailing_comment_closes_block() {
    let mut parser = Parser::new(Vec::new());
    parser.feed("$$");
    parser.feed("x");
    parser.feed("$$ <!-- c -->");
    assert_eq!(parser.state(), ParseState::Text);
    parser.feed("after");
    parser.finish();
    assert_eq!(
        kinds(&parser.into_sink()),
        vec!["begin-equation", "equation-line", "end-equation", "comment", "text"]
    );
}

#[test]
fn test_several_spans_then_unclosed_opener() {
    let events = parse_to_events("<!-- a --> mid <!-- b --> end <!-- c\nstill -->");
    assert_eq!(
        events,
        vec![
            Event::Text {
                line: " mid  end ".to_string()
            },
            Event::Comment {
                text: "<!-- a -->".to_string()
            },
            Event::Comment {
                text: "<!-- b -->".to_string()
            },
            Event::Comment {
                text: "<!-- c".to_string()
            },
            Event::Comment {
                text: "still -->".to_string()
            },
        ]
    );
}
