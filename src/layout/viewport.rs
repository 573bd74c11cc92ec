//! Viewport state: scroll offsets and visible row/column ranges.

use super::{ColumnLayout, HEADER_HEIGHT, HEADER_WIDTH, ROW_HEIGHT};

/// The visible pixel window into the logical, unbounded grid.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Horizontal scroll position in pixels, always >= 0.
    pub scroll_x: f32,
    /// Vertical scroll position in pixels, always >= 0.
    pub scroll_y: f32,
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }

    /// Scroll by delta amounts, clamped at the grid origin. The grid is
    /// unbounded down and right, so there is no far-edge clamp.
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) {
        self.scroll_x = (self.scroll_x + delta_x).max(0.0);
        self.scroll_y = (self.scroll_y + delta_y).max(0.0);
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Visible row range (inclusive): the first row under the scroll
    /// offset through the last row the canvas height can show.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn visible_rows(&self) -> (u32, u32) {
        let start = (self.scroll_y / ROW_HEIGHT).floor() as u32;
        let span = (self.height / ROW_HEIGHT).ceil() as u32;
        (start, start.saturating_add(span))
    }

    /// Visible column range (inclusive). The start is the last column whose
    /// left edge is at or left of the content origin; the end deliberately
    /// includes one extra column so the right edge never under-draws.
    pub fn visible_cols(&self, columns: &ColumnLayout) -> (u32, u32) {
        let mut current_x = HEADER_WIDTH - self.scroll_x;
        let mut start = 0u32;
        // Inclusive bound: a left edge exactly on the origin still counts
        // as the start column after the trailing saturating_sub.
        while current_x <= 0.0 {
            current_x += columns.width_of(start);
            start = start.saturating_add(1);
        }
        let mut end = start;
        while current_x < self.width {
            current_x += columns.width_of(end);
            end = end.saturating_add(1);
        }
        (start.saturating_sub(1), end)
    }

    /// Row under screen y, or `None` when y is above the first row
    /// (inside the header band with no vertical scroll).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn row_at(&self, y: f32) -> Option<u32> {
        let sheet_y = y - HEADER_HEIGHT + self.scroll_y;
        if sheet_y < 0.0 {
            return None;
        }
        Some((sheet_y / ROW_HEIGHT).floor() as u32)
    }

    /// Y of the top edge of `row` on screen.
    #[allow(clippy::cast_precision_loss)]
    pub fn row_top(&self, row: u32) -> f32 {
        HEADER_HEIGHT + row as f32 * ROW_HEIGHT - self.scroll_y
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
    fn scroll_clamps_at_origin() {
        let mut viewport = Viewport::new();
        viewport.scroll_by(-100.0, -100.0);
        assert_eq!(viewport.scroll_x, 0.0);
        assert_eq!(viewport.scroll_y, 0.0);

        viewport.scroll_by(30.0, 55.0);
        viewport.scroll_by(-10.0, -5.0);
        assert_eq!(viewport.scroll_x, 20.0);
        assert_eq!(viewport.scroll_y, 50.0);
    }

    #[test]
    fn visible_rows_cover_canvas_height() {
        let mut viewport = Viewport::new();
        viewport.resize(800.0, 250.0);
        assert_eq!(viewport.visible_rows(), (0, 10));

        viewport.scroll_by(0.0, ROW_HEIGHT * 4.0);
        assert_eq!(viewport.visible_rows(), (4, 14));
    }

    #[test]
    fn visible_cols_include_partial_and_overdraw() {
        let mut viewport = Viewport::new();
        viewport.resize(350.0, 600.0);
        let columns = ColumnLayout::new();

        // Unscrolled: columns 0..=3 cover 350 px (3 full plus the gutter).
        assert_eq!(viewport.visible_cols(&columns), (0, 3));

        // Scroll halfway into column 1: it is still partially visible.
        viewport.scroll_by(150.0, 0.0);
        let (start, end) = viewport.visible_cols(&columns);
        assert_eq!(start, 1);
        assert!(end >= 4);
    }

    #[test]
    fn visible_cols_start_on_exact_origin_boundary() {
        use crate::layout::DEFAULT_COL_WIDTH;

        let mut viewport = Viewport::new();
        let columns = ColumnLayout::new();

        // Column 1's left edge lands exactly on the content origin; column 0
        // is fully scrolled off and must not be the start.
        viewport.scroll_by(HEADER_WIDTH + DEFAULT_COL_WIDTH, 0.0);
        let (start, _) = viewport.visible_cols(&columns);
        assert_eq!(start, 1);

        // One more pixel and column 1 is partially clipped, still the start.
        viewport.scroll_by(1.0, 0.0);
        let (start, _) = viewport.visible_cols(&columns);
        assert_eq!(start, 1);
    }

    #[test]
    fn row_at_maps_header_band_to_none() {
        let viewport = Viewport::new();
        assert_eq!(viewport.row_at(10.0), None);
        assert_eq!(viewport.row_at(HEADER_HEIGHT), Some(0));
        assert_eq!(viewport.row_at(HEADER_HEIGHT + ROW_HEIGHT * 2.5), Some(2));
    }

    #[test]
    fn row_at_tracks_scroll() {
        let mut viewport = Viewport::new();
        viewport.scroll_by(0.0, ROW_HEIGHT * 3.0);
        assert_eq!(viewport.row_at(HEADER_HEIGHT), Some(3));
    }
}
