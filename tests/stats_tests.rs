//! Aggregation tests over selected ranges, including the parse-or-skip
//! rule and the display summary.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::stats::RangeStats;
use gridview::store::CellStore;
use gridview::{CellAddr, RangeSelection};

fn store_from_rows(rows: &[&[&str]]) -> CellStore {
    let mut store = CellStore::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            store.set(r as u32, c as u32, *text);
        }
    }
    store
}

fn range(r0: u32, c0: u32, r1: u32, c1: u32) -> RangeSelection {
    RangeSelection::new(CellAddr::new(r0, c0), CellAddr::new(r1, c1))
}

#[test]
fn numeric_cells_aggregate_and_text_is_skipped() {
    let store = store_from_rows(&[&["1", "2"], &["3", "x"], &["5", "6"]]);
    let stats = RangeStats::compute(&store, &range(0, 0, 2, 1));

    assert_eq!(stats.sum, 17.0);
    assert_eq!(stats.count, 5);
    assert_eq!(stats.average(), 3.4);
    assert_eq!(stats.min, Some(1.0));
    assert_eq!(stats.max, Some(6.0));
}

#[test]
fn whitespace_around_numbers_is_tolerated() {
    let store = store_from_rows(&[&[" 4 ", "2.5", ""]]);
    let stats = RangeStats::compute(&store, &range(0, 0, 0, 2));

    assert_eq!(stats.sum, 6.5);
    assert_eq!(stats.count, 2);
}

#[test]
fn negative_and_fractional_values() {
    let store = store_from_rows(&[&["-3", "1.5"], &["-0.5", "10"]]);
    let stats = RangeStats::compute(&store, &range(0, 0, 1, 1));

    assert_eq!(stats.sum, 8.0);
    assert_eq!(stats.min, Some(-3.0));
    assert_eq!(stats.max, Some(10.0));
}

#[test]
fn all_text_range_yields_sentinels() {
    let store = store_from_rows(&[&["a", "b"], &["c", "d"]]);
    let stats = RangeStats::compute(&store, &range(0, 0, 1, 1));

    assert_eq!(stats.count, 0);
    assert_eq!(stats.sum, 0.0);
    assert_eq!(stats.average(), 0.0);
    assert_eq!(stats.min, None);
    assert_eq!(stats.max, None);
    assert_eq!(
        stats.summary(),
        "Sum: 0.00 | Average: 0.00 | Smallest: N/A | Greatest: N/A"
    );
}

#[test]
fn summary_formats_two_decimal_places() {
    let store = store_from_rows(&[&["1", "2", "4"]]);
    let stats = RangeStats::compute(&store, &range(0, 0, 0, 2));

    assert_eq!(
        stats.summary(),
        "Sum: 7.00 | Average: 2.33 | Smallest: 1.00 | Greatest: 4.00"
    );
}

#[test]
fn reversed_drag_covers_the_same_cells() {
    let store = store_from_rows(&[&["1", "2"], &["3", "4"]]);
    let forward = RangeStats::compute(&store, &range(0, 0, 1, 1));
    let backward = RangeStats::compute(&store, &range(1, 1, 0, 0));

    assert_eq!(forward, backward);
}

#[test]
fn range_past_loaded_data_counts_nothing_extra() {
    let store = store_from_rows(&[&["5"]]);
    let stats = RangeStats::compute(&store, &range(0, 0, 50, 10));

    assert_eq!(stats.sum, 5.0);
    assert_eq!(stats.count, 1);
}
