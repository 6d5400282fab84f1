//! Shared helpers for the integration tests.

use mdtex_babel::ir::events::Event;
use std::fs;
use std::path::PathBuf;

/// Read a document from `tests/fixtures`.
pub fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// Event kinds only, for order assertions that do not care about payloads.
pub fn kinds(events: &[Event]) -> Vec<&'static str> {
    events.iter().map(Event::kind).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Table,
    Equation,
    Code,
    List,
}

/// Check that every begin event has exactly one matching end event, in stack order, and
/// that body events only appear inside their own block.
pub fn assert_well_nested(events: &[Event]) {
    let mut open: Vec<Block> = Vec::new();
    for (index, event) in events.iter().enumerate() {
        let expect_top = |open: &Vec<Block>, block: Block| {
            assert_eq!(
                open.last(),
                Some(&block),
                "event #{index} {event:?} outside of {block:?}; open blocks: {open:?}"
            );
        };
        match event {
            Event::BeginTable => open.push(Block::Table),
            Event::BeginEquation => open.push(Block::Equation),
            Event::BeginCode { .. } => open.push(Block::Code),
            Event::BeginList { .. } => open.push(Block::List),
            Event::TableRow { .. } | Event::TableRule => expect_top(&open, Block::Table),
            Event::EquationLine { .. } => expect_top(&open, Block::Equation),
            Event::CodeLine { .. } => expect_top(&open, Block::Code),
            Event::ListItem { .. } => expect_top(&open, Block::List),
            Event::EndTable => {
                expect_top(&open, Block::Table);
                open.pop();
            }
            Event::EndEquation => {
                expect_top(&open, Block::Equation);
                open.pop();
            }
            Event::EndCode => {
                expect_top(&open, Block::Code);
                open.pop();
            }
            Event::EndList { .. } => {
                expect_top(&open, Block::List);
                open.pop();
            }
            _ => {}
        }
    }
    assert!(open.is_empty(), "blocks left open after finish: {open:?}");
}
