//! Keyboard editing scenarios: typing into the targeted cell, backspace,
//! and arrow-key navigation.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::layout::{DEFAULT_COL_WIDTH, HEADER_HEIGHT, HEADER_WIDTH, ROW_HEIGHT};
use gridview::{CellAddr, GridState, Selection};

fn click(state: &mut GridState, row: u32, col: u32) {
    let x = HEADER_WIDTH + DEFAULT_COL_WIDTH * (col as f32) + DEFAULT_COL_WIDTH / 2.0;
    let y = HEADER_HEIGHT + ROW_HEIGHT * (row as f32) + ROW_HEIGHT / 2.0;
    state.pointer_down(x, y);
    state.pointer_up();
}

fn type_keys(state: &mut GridState, keys: &[&str]) {
    for key in keys {
        assert!(state.key_down(key), "key {key:?} should be handled");
    }
}

#[test]
fn typing_appends_characters_to_clicked_cell() {
    let mut state = GridState::new();
    click(&mut state, 2, 1);
    type_keys(&mut state, &["4", "2"]);

    assert_eq!(state.store.get(2, 1), "42");
    assert_eq!(state.edit_target, Some(CellAddr::new(2, 1)));
}

#[test]
fn backspace_removes_last_character() {
    let mut state = GridState::new();
    click(&mut state, 0, 0);
    type_keys(&mut state, &["a", "b", "c", "Backspace"]);

    assert_eq!(state.store.get(0, 0), "ab");

    // Backspace on an already-empty cell stays handled and harmless.
    type_keys(&mut state, &["Backspace", "Backspace", "Backspace"]);
    assert_eq!(state.store.get(0, 0), "");
}

#[test]
fn backspace_alone_never_grows_the_store() {
    let mut state = GridState::new();
    click(&mut state, 7, 3);
    type_keys(&mut state, &["Backspace", "Backspace"]);

    assert_eq!(state.store.row_len(7), 0);
    assert_eq!(state.store.loaded_rows(), 0);
}

#[test]
fn typing_into_unloaded_row_vivifies_it() {
    let mut state = GridState::new();
    state.selection = Some(Selection::Cell(CellAddr::new(400, 3)));
    state.edit_target = Some(CellAddr::new(400, 3));

    type_keys(&mut state, &["9"]);
    assert_eq!(state.store.get(400, 3), "9");
}

#[test]
fn arrows_move_the_selected_cell() {
    let mut state = GridState::new();
    click(&mut state, 2, 2);

    type_keys(&mut state, &["ArrowDown", "ArrowRight"]);
    assert_eq!(state.selection, Some(Selection::Cell(CellAddr::new(3, 3))));

    type_keys(&mut state, &["ArrowUp", "ArrowUp", "ArrowUp", "ArrowUp"]);
    // Clamped at row 0.
    assert_eq!(state.selection, Some(Selection::Cell(CellAddr::new(0, 3))));
}

#[test]
fn arrow_from_range_steps_off_the_anchor() {
    let mut state = GridState::new();
    click(&mut state, 1, 1);
    state.pointer_down(
        HEADER_WIDTH + DEFAULT_COL_WIDTH * 1.5,
        HEADER_HEIGHT + ROW_HEIGHT * 1.5,
    );
    state.pointer_move(
        HEADER_WIDTH + DEFAULT_COL_WIDTH * 3.5,
        HEADER_HEIGHT + ROW_HEIGHT * 4.5,
    );
    state.pointer_up();
    assert!(state.selection.unwrap().range().is_some());

    state.key_down("ArrowDown");
    assert_eq!(state.selection, Some(Selection::Cell(CellAddr::new(2, 1))));
}

#[test]
fn arrows_clear_the_edit_target() {
    let mut state = GridState::new();
    click(&mut state, 0, 0);
    type_keys(&mut state, &["5", "ArrowRight"]);

    assert_eq!(state.edit_target, None);
    // With no target, printable keys are ignored rather than misdirected.
    assert!(!state.key_down("7"));
    assert_eq!(state.store.get(0, 0), "5");
    assert_eq!(state.store.get(0, 1), "");
}

#[test]
fn unhandled_keys_report_false() {
    let mut state = GridState::new();
    click(&mut state, 0, 0);

    assert!(!state.key_down("Shift"));
    assert!(!state.key_down("Escape"));
    assert!(!state.key_down("F5"));
    assert_eq!(state.store.get(0, 0), "");
}

#[test]
fn edit_keeps_selection_on_the_target_cell() {
    let mut state = GridState::new();
    click(&mut state, 3, 2);
    type_keys(&mut state, &["x"]);

    assert_eq!(state.selection, Some(Selection::Cell(CellAddr::new(3, 2))));
}
