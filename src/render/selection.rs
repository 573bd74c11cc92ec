//! Selection overlay helpers.
//!
//! These helpers keep selection math testable without depending on Canvas APIs.

use crate::layout::{ColumnLayout, Viewport, ROW_HEIGHT};
use crate::types::RangeSelection;

/// Side length of the square fill handle drawn on the bottom-right corner of
/// a range selection.
pub const HANDLE_SIZE: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Screen-space rectangle covering the normalized extent of `range`.
///
/// The rectangle can extend past the viewport edges; the renderer clips
/// against the header bands when drawing.
pub fn selection_rect(
    range: &RangeSelection,
    columns: &ColumnLayout,
    viewport: &Viewport,
) -> SelectionRect {
    let (min_row, min_col, max_row, max_col) = range.bounds();
    let x = columns.left_edge(min_col, viewport.scroll_x);
    let y = viewport.row_top(min_row);
    let w = columns.right_edge(max_col, viewport.scroll_x) - x;
    let rows = (max_row - min_row).saturating_add(1);
    let h = f32::from(u16::try_from(rows).unwrap_or(u16::MAX)) * ROW_HEIGHT;
    SelectionRect {
        x: f64::from(x),
        y: f64::from(y),
        w: f64::from(w),
        h: f64::from(h),
    }
}

/// Center of the corner fill handle: the bottom-right corner of the
/// selection rectangle.
pub fn handle_center(rect: &SelectionRect) -> (f64, f64) {
    (rect.x + rect.w, rect.y + rect.h)
}
