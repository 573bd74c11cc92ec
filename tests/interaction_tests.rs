//! End-to-end interaction scenarios driving `GridState` through pointer
//! sequences the way the browser shell does.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::layout::{DEFAULT_COL_WIDTH, HEADER_HEIGHT, HEADER_WIDTH, ROW_HEIGHT};
use gridview::types::{CursorHint, InteractionMode};
use gridview::{CellAddr, GridState, Selection};

fn col_center(col: u32) -> f32 {
    HEADER_WIDTH + DEFAULT_COL_WIDTH * (col as f32) + DEFAULT_COL_WIDTH / 2.0
}

fn row_center(row: u32) -> f32 {
    HEADER_HEIGHT + ROW_HEIGHT * (row as f32) + ROW_HEIGHT / 2.0
}

/// Press, drag through several cells, release.
fn drag(state: &mut GridState, from: (u32, u32), to: (u32, u32)) {
    state.pointer_down(col_center(from.1), row_center(from.0));
    state.pointer_move(col_center(to.1), row_center(to.0));
    state.pointer_up();
}

#[test]
fn click_then_drag_then_release_yields_idle_range() {
    let mut state = GridState::new();
    drag(&mut state, (1, 1), (3, 2));

    assert_eq!(state.mode, InteractionMode::Idle);
    let range = state.selection.unwrap().range().copied().unwrap();
    assert_eq!(range.bounds(), (1, 1, 3, 2));
    assert_eq!(range.anchor(), CellAddr::new(1, 1));
}

#[test]
fn second_click_replaces_range_with_cell() {
    let mut state = GridState::new();
    drag(&mut state, (0, 0), (2, 2));

    state.pointer_down(col_center(4), row_center(4));
    state.pointer_up();

    assert_eq!(state.selection, Some(Selection::Cell(CellAddr::new(4, 4))));
}

#[test]
fn corner_handle_drag_extends_finished_range() {
    let mut state = GridState::new();
    drag(&mut state, (0, 0), (1, 1));

    // Grab the handle at the bottom-right corner of the finished range.
    let handle_x = state.columns.right_edge(1, 0.0);
    let handle_y = HEADER_HEIGHT + 2.0 * ROW_HEIGHT;
    state.pointer_down(handle_x, handle_y);
    assert_eq!(state.mode, InteractionMode::ResizingRangeCorner);

    state.pointer_move(col_center(3), row_center(4));
    state.pointer_up();

    let range = state.selection.unwrap().range().copied().unwrap();
    assert_eq!(range.bounds(), (0, 0, 4, 3));
    assert_eq!(range.anchor(), CellAddr::new(0, 0));
}

#[test]
fn near_miss_on_handle_starts_a_fresh_drag() {
    let mut state = GridState::new();
    drag(&mut state, (0, 0), (1, 1));

    let handle_x = state.columns.right_edge(1, 0.0);
    let handle_y = HEADER_HEIGHT + 2.0 * ROW_HEIGHT;
    // 12 px away is outside the 5 px tolerance.
    state.pointer_down(handle_x + 12.0, handle_y + 12.0);

    assert_eq!(state.mode, InteractionMode::DraggingRange);
    assert!(state.selection.unwrap().cell().is_some());
}

#[test]
fn column_resize_leaves_selection_alone() {
    let mut state = GridState::new();
    drag(&mut state, (2, 0), (3, 0));
    let before = state.selection;

    let edge = HEADER_WIDTH + DEFAULT_COL_WIDTH;
    state.pointer_down(edge - 2.0, HEADER_HEIGHT / 2.0);
    state.pointer_move(edge + 60.0, HEADER_HEIGHT / 2.0);
    state.pointer_up();

    assert_eq!(state.columns.width_of(0), DEFAULT_COL_WIDTH + 60.0);
    assert_eq!(state.selection, before);
}

#[test]
fn resize_target_is_latched_at_press_time() {
    let mut state = GridState::new();
    let edge = HEADER_WIDTH + DEFAULT_COL_WIDTH;
    state.pointer_down(edge - 2.0, HEADER_HEIGHT / 2.0);

    // Sweep across other columns; only column 0 tracks the pointer.
    state.pointer_move(col_center(3), HEADER_HEIGHT / 2.0);
    state.pointer_up();

    assert_eq!(state.mode, InteractionMode::Idle);
    assert_eq!(state.columns.width_of(1), DEFAULT_COL_WIDTH);
    assert!(state.columns.width_of(0) > DEFAULT_COL_WIDTH);
}

#[test]
fn drag_across_unloaded_rows_selects_empty_cells() {
    let mut state = GridState::new();
    state.store.set(0, 0, "1");

    drag(&mut state, (0, 0), (6, 0));

    let stats = state.stats.unwrap();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.sum, 1.0);
}

#[test]
fn hover_hint_only_in_header_band() {
    let mut state = GridState::new();
    let edge = HEADER_WIDTH + DEFAULT_COL_WIDTH;

    assert_eq!(
        state.pointer_move(edge - 2.0, HEADER_HEIGHT - 5.0),
        CursorHint::ColResize
    );
    assert_eq!(
        state.pointer_move(edge - 2.0, HEADER_HEIGHT + 40.0),
        CursorHint::Default
    );
}

#[test]
fn events_in_odd_order_are_harmless() {
    let mut state = GridState::new();

    // Release with no press, moves with no press.
    state.pointer_up();
    state.pointer_move(col_center(1), row_center(1));
    assert_eq!(state.mode, InteractionMode::Idle);
    assert_eq!(state.selection, None);

    // Double press: the second press is swallowed by the active mode.
    state.pointer_down(col_center(0), row_center(0));
    state.pointer_down(col_center(5), row_center(5));
    assert_eq!(state.selection, Some(Selection::Cell(CellAddr::new(0, 0))));
}
