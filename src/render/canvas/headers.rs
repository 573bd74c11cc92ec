//! Row and column header rendering.
//!
//! Column headers show letters (A, B, ..., Z, AA, ...), row headers show
//! 1-based row numbers. Both stay pinned while the grid scrolls under them.

use web_sys::CanvasRenderingContext2d;

use crate::layout::{ColumnLayout, Viewport, HEADER_HEIGHT, HEADER_WIDTH, ROW_HEIGHT};
use crate::render::col_to_letter;

const HEADER_FONT: &str = "12px Arial";
const HEADER_TEXT: &str = "#000";

/// Render column letters across the top header band.
pub fn render_column_headers(
    ctx: &CanvasRenderingContext2d,
    columns: &ColumnLayout,
    viewport: &Viewport,
) {
    ctx.set_font(HEADER_FONT);
    ctx.set_fill_style_str(HEADER_TEXT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let (start_col, end_col) = viewport.visible_cols(columns);
    for col in start_col..=end_col {
        let x = f64::from(columns.left_edge(col, viewport.scroll_x));
        let w = f64::from(columns.width_of(col));
        if x + w < f64::from(HEADER_WIDTH) {
            continue;
        }
        let label = col_to_letter(col);
        let _ = ctx.fill_text(&label, x + w / 2.0, f64::from(HEADER_HEIGHT) / 2.0);
    }
}

/// Render 1-based row numbers down the left header band.
pub fn render_row_headers(ctx: &CanvasRenderingContext2d, viewport: &Viewport) {
    ctx.set_font(HEADER_FONT);
    ctx.set_fill_style_str(HEADER_TEXT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let (start_row, end_row) = viewport.visible_rows();
    for row in start_row..=end_row {
        let y = f64::from(viewport.row_top(row)) + f64::from(ROW_HEIGHT) / 2.0;
        if y < f64::from(HEADER_HEIGHT) {
            continue;
        }
        let label = (row + 1).to_string();
        let _ = ctx.fill_text(&label, f64::from(HEADER_WIDTH) / 2.0, y);
    }
}
