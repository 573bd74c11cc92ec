//! Per-column width storage and horizontal pixel mapping.
//!
//! Columns are conceptually unbounded to the right: any index past the
//! highest explicitly sized column reads as the default width, so edge
//! math and hit testing never run off the end of the grid.

use std::collections::HashMap;

use super::{DEFAULT_COL_WIDTH, HEADER_WIDTH, MIN_COL_WIDTH};

/// Pixel widths for the grid's columns.
///
/// Only explicitly resized columns occupy storage; everything else is the
/// default width. Edge lookups are O(col) linear scans, which is fine at
/// interactive column counts.
#[derive(Debug, Clone, Default)]
pub struct ColumnLayout {
    widths: HashMap<u32, f32>,
}

impl ColumnLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of `col` in pixels: the stored width, or the default for any
    /// column never resized.
    pub fn width_of(&self, col: u32) -> f32 {
        self.widths.get(&col).copied().unwrap_or(DEFAULT_COL_WIDTH)
    }

    /// Set the width of `col`, clamped to the 50 px minimum. No upper bound.
    pub fn set_width(&mut self, col: u32, px: f32) {
        self.widths.insert(col, px.max(MIN_COL_WIDTH));
    }

    /// X of the left edge of `col` on screen: the header gutter width plus
    /// the widths of all preceding columns, shifted by the scroll offset.
    pub fn left_edge(&self, col: u32, scroll_x: f32) -> f32 {
        let mut x = HEADER_WIDTH - scroll_x;
        for c in 0..col {
            x += self.width_of(c);
        }
        x
    }

    /// X of the right edge of `col` on screen.
    pub fn right_edge(&self, col: u32, scroll_x: f32) -> f32 {
        self.left_edge(col, scroll_x) + self.width_of(col)
    }

    /// Inverse of `left_edge`: the column containing screen x, or `None`
    /// when `x` precedes column 0 (inside or left of the row gutter).
    ///
    /// Scans forward accumulating widths; terminates because every width
    /// is at least the 50 px minimum.
    pub fn column_at(&self, x: f32, scroll_x: f32) -> Option<u32> {
        let mut current_x = HEADER_WIDTH - scroll_x;
        if x < current_x {
            return None;
        }
        let mut col = 0u32;
        loop {
            let width = self.width_of(col);
            if x < current_x + width {
                return Some(col);
            }
            current_x += width;
            col = col.checked_add(1)?;
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn default_width_for_unseen_columns() {
        let cols = ColumnLayout::new();
        assert_eq!(cols.width_of(0), DEFAULT_COL_WIDTH);
        assert_eq!(cols.width_of(10_000), DEFAULT_COL_WIDTH);
    }

    #[test]
    fn set_width_clamps_to_minimum() {
        let mut cols = ColumnLayout::new();
        cols.set_width(3, 10.0);
        assert_eq!(cols.width_of(3), MIN_COL_WIDTH);
        cols.set_width(3, 240.0);
        assert_eq!(cols.width_of(3), 240.0);
    }

    #[test]
    fn left_edge_accumulates_widths() {
        let mut cols = ColumnLayout::new();
        cols.set_width(0, 60.0);
        cols.set_width(1, 80.0);

        assert_eq!(cols.left_edge(0, 0.0), HEADER_WIDTH);
        assert_eq!(cols.left_edge(1, 0.0), HEADER_WIDTH + 60.0);
        assert_eq!(cols.left_edge(2, 0.0), HEADER_WIDTH + 140.0);
        assert_eq!(cols.right_edge(2, 0.0), HEADER_WIDTH + 240.0);
    }

    #[test]
    fn column_at_inverts_left_edge() {
        let mut cols = ColumnLayout::new();
        cols.set_width(1, 75.0);
        cols.set_width(4, 300.0);

        for scroll_x in [0.0, 30.0, 512.5] {
            for col in 0..8 {
                let edge = cols.left_edge(col, scroll_x);
                assert_eq!(cols.column_at(edge, scroll_x), Some(col));
            }
        }
    }

    #[test]
    fn column_at_before_first_column_is_none() {
        let cols = ColumnLayout::new();
        assert_eq!(cols.column_at(0.0, 0.0), None);
        assert_eq!(cols.column_at(HEADER_WIDTH - 1.0, 0.0), None);
        assert_eq!(cols.column_at(HEADER_WIDTH, 0.0), Some(0));
    }

    #[test]
    fn column_at_synthesizes_past_highest_seen() {
        let cols = ColumnLayout::new();
        // Five default columns past the gutter.
        let x = HEADER_WIDTH + DEFAULT_COL_WIDTH * 5.0 + 1.0;
        assert_eq!(cols.column_at(x, 0.0), Some(5));
    }
}
