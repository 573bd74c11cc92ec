//! Sparse, page-extendable cell storage.
//!
//! Rows are created on demand, either by a page merge from the data source
//! or by a user edit beyond the loaded extent. Storage only ever grows;
//! there are no delete or compaction paths.

use std::collections::HashMap;

/// Extra empty cells appended after each parsed record so the user can
/// edit immediately past the data boundary without another vivify step.
pub const PAGE_PAD_COLS: usize = 50;

/// Sparse mapping from row index to that row's cell texts.
///
/// An absent row, or a column past a row's length, reads as the empty
/// string.
#[derive(Debug, Clone, Default)]
pub struct CellStore {
    rows: HashMap<u32, Vec<String>>,
    /// High-water mark: one past the highest row merged from a page.
    loaded_rows: u32,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell text at (row, col); empty string when unset.
    pub fn get(&self, row: u32, col: u32) -> &str {
        self.rows
            .get(&row)
            .and_then(|cells| cells.get(col as usize))
            .map_or("", String::as_str)
    }

    /// Write a cell, vivifying the row and padding any missing column
    /// slots with empty strings up to `col` first.
    pub fn set(&mut self, row: u32, col: u32, text: impl Into<String>) {
        let cells = self.rows.entry(row).or_default();
        let idx = col as usize;
        if cells.len() <= idx {
            cells.resize(idx + 1, String::new());
        }
        if let Some(slot) = cells.get_mut(idx) {
            *slot = text.into();
        }
    }

    /// Merge one fetched page of raw records starting at `start_row`.
    ///
    /// Each record is a comma-separated list of `"key: value"` fields; only
    /// the value after the first `": "` is stored. A field without the
    /// separator violates the data-source contract, but its raw text is
    /// kept unchanged rather than dropped. Every parsed row gets
    /// `PAGE_PAD_COLS` trailing empty cells.
    ///
    /// Addressing by row index makes merges of disjoint pages
    /// order-independent, so out-of-order fetch completions are safe.
    pub fn append_page(&mut self, start_row: u32, records: &[String]) {
        for (i, record) in records.iter().enumerate() {
            let offset = u32::try_from(i).unwrap_or(u32::MAX);
            let row = start_row.saturating_add(offset);
            let mut cells: Vec<String> = record
                .split(',')
                .map(|field| field.split_once(": ").map_or(field, |(_, v)| v).to_string())
                .collect();
            cells.extend(std::iter::repeat_with(String::new).take(PAGE_PAD_COLS));
            self.rows.insert(row, cells);
            self.loaded_rows = self.loaded_rows.max(row.saturating_add(1));
        }
    }

    /// One past the highest row index merged from the data source.
    pub fn loaded_rows(&self) -> u32 {
        self.loaded_rows
    }

    /// Number of cells in `row` (0 for an absent row).
    pub fn row_len(&self, row: u32) -> usize {
        self.rows.get(&row).map_or(0, Vec::len)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::cast_possible_truncation,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn absent_cells_read_as_empty() {
        let store = CellStore::new();
        assert_eq!(store.get(0, 0), "");
        assert_eq!(store.get(999, 999), "");
    }

    #[test]
    fn set_vivifies_intervening_columns() {
        let mut store = CellStore::new();
        store.set(2, 4, "x");

        assert_eq!(store.get(2, 4), "x");
        assert_eq!(store.row_len(2), 5);
        for col in 0..4 {
            assert_eq!(store.get(2, col), "");
        }
    }

    #[test]
    fn append_page_strips_key_prefixes_and_pads() {
        let mut store = CellStore::new();
        store.append_page(0, &["A: 5, B: 10, C: oops".to_string()]);

        assert_eq!(store.get(0, 0), "5");
        assert_eq!(store.get(0, 1), "10");
        assert_eq!(store.get(0, 2), "oops");
        assert_eq!(store.row_len(0), 3 + PAGE_PAD_COLS);
        for col in 3..(3 + PAGE_PAD_COLS as u32) {
            assert_eq!(store.get(0, col), "");
        }
    }

    #[test]
    fn malformed_field_kept_raw() {
        let mut store = CellStore::new();
        store.append_page(0, &["A: 1, garbage".to_string()]);
        assert_eq!(store.get(0, 0), "1");
        assert_eq!(store.get(0, 1), " garbage");
    }

    #[test]
    fn disjoint_page_merge_is_order_independent() {
        let page_a = vec!["A: 1".to_string(), "A: 2".to_string()];
        let page_b = vec!["A: 3".to_string(), "A: 4".to_string()];

        let mut forward = CellStore::new();
        forward.append_page(0, &page_a);
        forward.append_page(2, &page_b);

        let mut reverse = CellStore::new();
        reverse.append_page(2, &page_b);
        reverse.append_page(0, &page_a);

        for row in 0..4 {
            assert_eq!(forward.get(row, 0), reverse.get(row, 0));
        }
        assert_eq!(forward.loaded_rows(), 4);
        assert_eq!(reverse.loaded_rows(), 4);
    }
}
