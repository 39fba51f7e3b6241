//! Editing sequences run through the public engine API.

use pretty_assertions::assert_eq;
use sten::{Command, Cursor, Edit, EditEngine, ErrorKind};

fn text(engine: &EditEngine) -> Vec<String> {
    engine
        .document()
        .rows()
        .map(|r| String::from_utf8_lossy(r).into_owned())
        .collect()
}

fn type_str(engine: &mut EditEngine, s: &str) {
    for b in s.bytes() {
        engine.insert_char(b).unwrap();
    }
}

/// Move the cursor to `(row, col)` using only navigation commands.
fn goto(engine: &mut EditEngine, row: usize, col: usize) {
    while engine.cursor().row() > row {
        engine.move_up();
    }
    while engine.cursor().row() < row {
        assert_eq!(engine.move_down(), Edit::Moved, "row {row} is unreachable");
    }
    engine.move_bol();
    for _ in 0..col {
        assert_eq!(engine.move_right(), Edit::Moved, "col {col} is unreachable");
    }
}

fn assert_invariants(engine: &EditEngine) {
    let doc = engine.document();
    let (row, col) = engine.cursor().position();
    let vp = engine.viewport();

    for i in 0..doc.row_count() {
        let line = doc.line(i).unwrap();
        assert!(line.len() <= line.capacity(), "row {i} exceeds its capacity");
    }
    assert!(doc.row_count() <= doc.capacity());

    if row < doc.row_count() {
        assert!(col <= doc.line(row).unwrap().len(), "cursor column past end of line");
    } else {
        assert!(doc.is_empty() && row == 0 && col == 0, "cursor past end of document");
    }

    assert!(vp.y_offset() <= row && row < vp.y_offset() + vp.height(), "row out of view: {vp:?}");
    assert!(vp.x_offset() <= col && col < vp.x_offset() + vp.width(), "col out of view: {vp:?}");
    if doc.row_count() <= vp.height() {
        assert_eq!(vp.y_offset(), 0);
    }
    if row < doc.row_count() && doc.line(row).unwrap().len() < vp.width() {
        assert_eq!(vp.x_offset(), 0);
    }
}

#[test]
fn test_scenario_type_split_and_merge() {
    let mut engine = EditEngine::new(80, 24).unwrap();

    type_str(&mut engine, "hello");
    assert_eq!(text(&engine), ["hello"]);
    assert_eq!(engine.cursor().position(), (0, 5));

    engine.enter().unwrap();
    assert_eq!(text(&engine), ["hello", ""]);
    assert_eq!(engine.cursor().position(), (1, 0));

    type_str(&mut engine, "world");
    assert_eq!(text(&engine), ["hello", "world"]);
    assert_eq!(engine.cursor().position(), (1, 5));

    engine.move_bol();
    engine.backspace().unwrap();
    assert_eq!(text(&engine), ["helloworld"]);
    assert_eq!(engine.cursor().position(), (0, 5));
}

#[test]
fn test_scenario_vertical_scroll() {
    let mut engine = EditEngine::new(80, 3).unwrap();
    for i in 0..5 {
        if i > 0 {
            engine.enter().unwrap();
        }
        type_str(&mut engine, &format!("row {i}"));
    }
    assert_eq!(engine.document().row_count(), 5);

    goto(&mut engine, 0, 0);
    assert_eq!(engine.viewport().y_offset(), 0);

    goto(&mut engine, 4, 0);
    assert_eq!(engine.viewport().y_offset(), 2);
}

#[test]
fn test_scenario_delete_forward_joins() {
    let mut engine = EditEngine::load(["ab", "cd"], 80, 24).unwrap();
    engine.move_eol();
    assert_eq!(engine.delete_forward().unwrap(), Edit::Changed);
    assert_eq!(text(&engine), ["abcd"]);
    assert_eq!(engine.cursor().position(), (0, 2));
}

#[test]
fn test_enter_backspace_roundtrip_everywhere() {
    let lines = ["first line", "", "x", "a much longer third line of text", "end"];
    let reference = EditEngine::load(lines, 80, 24).unwrap();

    for (row, line) in lines.iter().enumerate() {
        for col in 0..=line.len() {
            let mut engine = EditEngine::load(lines, 80, 24).unwrap();
            goto(&mut engine, row, col);

            engine.enter().unwrap();
            assert_invariants(&engine);
            engine.backspace().unwrap();
            assert_invariants(&engine);

            assert_eq!(engine.document(), reference.document(), "at ({row}, {col})");
            assert_eq!(engine.cursor().position(), (row, col));
        }
    }
}

#[test]
fn test_noops_leave_state_unchanged() {
    let mut engine = EditEngine::load(["abc", "de"], 80, 24).unwrap();
    let doc = engine.document().clone();

    assert_eq!(engine.move_left(), Edit::Unchanged);
    assert_eq!(engine.move_up(), Edit::Unchanged);
    assert_eq!(engine.backspace().unwrap(), Edit::Unchanged);
    assert_eq!(engine.cursor(), Cursor::ORIGIN);
    assert_eq!(engine.document(), &doc);

    goto(&mut engine, 1, 2);
    let vp = engine.viewport();
    assert_eq!(engine.delete_forward().unwrap(), Edit::Unchanged);
    assert_eq!(engine.move_down(), Edit::Unchanged);
    assert_eq!(engine.move_right(), Edit::Unchanged);
    assert_eq!(engine.document(), &doc);
    assert_eq!(engine.cursor().position(), (1, 2));
    assert_eq!(engine.viewport(), vp);
}

#[test]
fn test_invariants_hold_through_mixed_session() {
    let mut engine = EditEngine::new(6, 3).unwrap();
    let script = [
        Command::InsertChar(b'a'),
        Command::Enter,
        Command::Enter,
        Command::InsertChar(b'b'),
        Command::InsertChar(b'c'),
        Command::InsertChar(b'd'),
        Command::InsertChar(b'e'),
        Command::InsertChar(b'f'),
        Command::InsertChar(b'g'),
        Command::InsertChar(b'h'),
        Command::MoveUp,
        Command::MoveUp,
        Command::MoveEol,
        Command::DeleteForward,
        Command::MoveDown,
        Command::MoveEol,
        Command::Enter,
        Command::Enter,
        Command::Enter,
        Command::MoveLeft,
        Command::Backspace,
        Command::Backspace,
        Command::MoveBol,
        Command::MoveRight,
        Command::MoveRight,
        Command::Enter,
        Command::MoveUp,
        Command::MoveUp,
        Command::MoveUp,
        Command::MoveUp,
        Command::MoveUp,
        Command::DeleteForward,
        Command::DeleteForward,
    ];

    assert_invariants(&engine);
    for command in script {
        engine.apply(command).unwrap();
        assert_invariants(&engine);
    }
}

#[test]
fn test_long_line_scrolls_horizontally_and_back() {
    let mut engine = EditEngine::new(10, 5).unwrap();
    type_str(&mut engine, &"x".repeat(25));
    assert_invariants(&engine);
    assert_eq!(engine.viewport().x_offset(), 16);

    engine.enter().unwrap();
    assert_invariants(&engine);
    assert_eq!(engine.viewport().x_offset(), 0);

    engine.backspace().unwrap();
    assert_invariants(&engine);
    assert_eq!(engine.cursor().position(), (0, 25));
    assert_eq!(engine.viewport().x_offset(), 16);
}

#[test]
fn test_merge_shrinks_document_under_viewport() {
    let mut engine = EditEngine::load([""; 10], 80, 4).unwrap();
    goto(&mut engine, 9, 0);
    assert_eq!(engine.viewport().y_offset(), 6);

    for _ in 0..7 {
        engine.backspace().unwrap();
        assert_invariants(&engine);
    }
    assert_eq!(engine.document().row_count(), 3);
    assert_eq!(engine.cursor().position(), (2, 0));
    assert_eq!(engine.viewport().y_offset(), 0);
}

#[test]
fn test_contract_violations_are_reported() {
    let mut engine = EditEngine::load(["abc"], 80, 24).unwrap();
    let err = engine.row(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ContractViolation);

    let err = engine.resize(0, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ContractViolation);
    assert_eq!(engine.viewport().width(), 80);
}

#[test]
fn test_serialize_matches_load() {
    let lines = ["alpha", "", "gamma"];
    let engine = EditEngine::load(lines, 80, 24).unwrap();
    let out: Vec<Vec<u8>> = lines.iter().map(|l| l.as_bytes().to_vec()).collect();
    assert_eq!(engine.to_lines(), out);
    assert_eq!(engine.cursor(), Cursor::ORIGIN);
    assert_eq!((engine.viewport().x_offset(), engine.viewport().y_offset()), (0, 0));
}
