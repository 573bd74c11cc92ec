//! Cell store tests: record parsing, page merging, and sparse access.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::store::{CellStore, PAGE_PAD_COLS};
use gridview::{GridState, PageRequest};

fn page(records: &[&str]) -> Vec<String> {
    records.iter().map(|r| (*r).to_string()).collect()
}

#[test]
fn records_split_into_values() {
    let mut store = CellStore::new();
    store.append_page(0, &page(&["Name: Ada, Age: 36, City: London"]));

    assert_eq!(store.get(0, 0), "Ada");
    assert_eq!(store.get(0, 1), "36");
    assert_eq!(store.get(0, 2), "London");
}

#[test]
fn fields_without_separator_kept_verbatim() {
    let mut store = CellStore::new();
    store.append_page(0, &page(&["A: 1, raw field, C: 3"]));

    assert_eq!(store.get(0, 0), "1");
    assert_eq!(store.get(0, 1), " raw field");
    assert_eq!(store.get(0, 2), "3");
}

#[test]
fn rows_are_padded_for_future_columns() {
    let mut store = CellStore::new();
    store.append_page(0, &page(&["A: 1, B: 2"]));

    assert_eq!(store.row_len(0), 2 + PAGE_PAD_COLS);
    assert_eq!(store.get(0, 30), "");
}

#[test]
fn unloaded_cells_read_as_empty() {
    let store = CellStore::new();
    assert_eq!(store.get(9999, 9999), "");
    assert_eq!(store.loaded_rows(), 0);
}

#[test]
fn set_vivifies_sparse_rows() {
    let mut store = CellStore::new();
    store.set(100, 7, "hello");

    assert_eq!(store.get(100, 7), "hello");
    assert_eq!(store.get(100, 6), "");
    assert_eq!(store.get(99, 7), "");
}

#[test]
fn pages_land_at_their_own_row_offsets() {
    let mut state = GridState::new();

    // Second page merges before the first; both land where they belong.
    state.merge_page(PageRequest { page: 2 }, &page(&["A: second"]));
    state.merge_page(PageRequest { page: 1 }, &page(&["A: first"]));

    assert_eq!(state.store.get(0, 0), "first");
    assert_eq!(state.store.get(100, 0), "second");
}

#[test]
fn remerging_a_page_overwrites_only_its_rows() {
    let mut store = CellStore::new();
    store.append_page(0, &page(&["A: old0", "A: old1"]));
    store.set(5, 0, "edit");

    store.append_page(0, &page(&["A: new0", "A: new1"]));

    assert_eq!(store.get(0, 0), "new0");
    assert_eq!(store.get(1, 0), "new1");
    assert_eq!(store.get(5, 0), "edit");
}

#[test]
fn loaded_rows_tracks_highest_merged_extent() {
    let mut store = CellStore::new();
    store.append_page(200, &page(&["A: 1", "A: 2", "A: 3"]));
    assert_eq!(store.loaded_rows(), 203);

    // An earlier page cannot shrink the extent.
    store.append_page(0, &page(&["A: 1"]));
    assert_eq!(store.loaded_rows(), 203);
}
