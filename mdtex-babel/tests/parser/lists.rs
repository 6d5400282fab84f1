use crate::common::{assert_well_nested, kinds};
use mdtex_babel::formats::markdown::{parse_to_events, Parser};
use mdtex_babel::ir::events::{Event, ListMarker};

#[test]
fn test_reopen_after_shallower_item() {
    // indents 0, 2, 2, 0
    let events = parse_to_events("- a\n  - b\n  - c\n- d");
    assert_eq!(
        kinds(&events),
        vec![
            "begin-list",
            "list-item",
            "text",
            "begin-list",
            "list-item",
            "text",
            "list-item",
            "text",
            "end-list",
            "list-item",
            "text",
            "end-list",
        ]
    );
    let begins = events
        .iter()
        .filter(|e| matches!(e, Event::BeginList { .. }))
        .count();
    let ends = events
        .iter()
        .filter(|e| matches!(e, Event::EndList { .. }))
        .count();
    assert_eq!((begins, ends), (2, 2));
}

#[test]
fn test_shallower_item_pops_several_levels() {
    let events = parse_to_events("1. a\n   - b\n      + c\n2. d\n");
    assert_eq!(
        events
            .iter()
            .filter_map(|e| match e {
                Event::BeginList { marker } => Some(("begin", *marker)),
                Event::EndList { marker } => Some(("end", *marker)),
                _ => None,
            })
            .collect::<Vec<_>>(),
        vec![
            ("begin", ListMarker::Ordered),
            ("begin", ListMarker::Bullet('-')),
            ("begin", ListMarker::Bullet('+')),
            ("end", ListMarker::Bullet('+')),
            ("end", ListMarker::Bullet('-')),
            ("end", ListMarker::Ordered),
        ]
    );
    assert_well_nested(&events);
}

#[test]
fn test_blank_line_closes_every_level() {
    let mut parser = Parser::new(Vec::new());
    parser.feed("- a");
    parser.feed("    - b");
    assert_eq!(parser.open_lists().len(), 2);
    parser.feed("");
    assert!(parser.open_lists().is_empty());
    let events = parser.into_sink();
    assert_eq!(
        &events[events.len() - 3..],
        &[
            Event::EndList {
                marker: ListMarker::Bullet('-')
            },
            Event::EndList {
                marker: ListMarker::Bullet('-')
            },
            Event::Text {
                line: String::new()
            },
        ]
    );
}

#[test]
fn test_plain_text_keeps_list_open() {
    let events = parse_to_events("- a\ncontinued\n- b");
    assert_eq!(
        kinds(&events),
        vec!["begin-list", "list-item", "text", "text", "list-item", "text", "end-list"]
    );
}

#[test]
fn test_item_text_is_not_reclassified_as_markup() {
    let events = parse_to_events("- # not a title");
    assert_eq!(
        events[2],
        Event::Text {
            line: "# not a title".to_string()
        }
    );
}

#[test]
fn test_tab_indent() {
    let mut parser = Parser::new(Vec::new());
    parser.feed("- a");
    parser.feed("\t- b");
    assert_eq!(parser.open_lists()[1].depth, 4);
}
