//! Canvas 2D renderer: full-frame redraw of grid lines, headers, cell text,
//! and the selection overlay.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::Result;
use crate::layout::{HEADER_HEIGHT, HEADER_WIDTH, ROW_HEIGHT};
use crate::render::backend::{RenderBackend, RenderParams};
use crate::render::selection::{handle_center, selection_rect, HANDLE_SIZE};
use crate::types::{CellAddr, Selection};

use super::headers::{render_column_headers, render_row_headers};

const CELL_FONT: &str = "12px Arial";
const CELL_PADDING: f64 = 5.0;

mod colors {
    /// Light grid lines between cells
    pub const GRID_LINE: &str = "#ccc";
    /// Heavy separators between the header bands and the cell area
    pub const AXIS_LINE: &str = "#000";
    pub const CELL_TEXT: &str = "#000";
    /// Range selection fill (light blue tint)
    pub const RANGE_FILL: &str = "#CCD5E3";
    /// Selection border and corner handle (blue)
    pub const SELECTION: &str = "#1a73e8";
}

/// Canvas 2D renderer implementing the RenderBackend trait
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    /// Create a new Canvas renderer from an HtmlCanvasElement
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to get 2d context")?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        let width = canvas.width();
        let height = canvas.height();

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
        })
    }

    /// Helper to get crisp pixel position for 1px lines
    fn crisp(x: f64) -> f64 {
        x.floor() + 0.5
    }

    /// Draw a stroked line
    fn stroke_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.move_to(Self::crisp(x1), Self::crisp(y1));
        self.ctx.line_to(Self::crisp(x2), Self::crisp(y2));
        self.ctx.stroke();
    }

    fn draw_grid(&self, params: &RenderParams<'_>) {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        self.ctx.clear_rect(0.0, 0.0, w, h);

        let viewport = params.viewport;
        let (start_col, end_col) = viewport.visible_cols(params.columns);
        for col in start_col..=end_col.saturating_add(1) {
            let x = f64::from(params.columns.left_edge(col, viewport.scroll_x));
            self.stroke_line(x, 0.0, x, h, 0.5, colors::GRID_LINE);
        }

        let (start_row, end_row) = viewport.visible_rows();
        for row in start_row..=end_row {
            let y = f64::from(viewport.row_top(row));
            self.stroke_line(0.0, y, w, y, 0.5, colors::GRID_LINE);
        }

        // Heavy separators between headers and the cell area.
        let hx = f64::from(HEADER_WIDTH);
        let hy = f64::from(HEADER_HEIGHT);
        self.stroke_line(hx, 0.0, hx, h, 2.0, colors::AXIS_LINE);
        self.stroke_line(0.0, hy, w, hy, 2.0, colors::AXIS_LINE);
    }

    /// Cell text plus the range fill and selected-cell outline, each cell
    /// clipped to its own rectangle so long values never bleed into
    /// neighbours.
    fn draw_cells(&self, params: &RenderParams<'_>) {
        let ctx = &self.ctx;
        ctx.set_font(CELL_FONT);
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");

        let viewport = params.viewport;
        let (start_col, end_col) = viewport.visible_cols(params.columns);
        let (start_row, end_row) = viewport.visible_rows();

        let range_bounds = params.selection.and_then(|sel| match sel {
            Selection::Range(range) => Some(range.bounds()),
            Selection::Cell(_) => None,
        });
        let selected_cell = params.selection.and_then(Selection::cell);

        for col in start_col..=end_col {
            let x = f64::from(params.columns.left_edge(col, viewport.scroll_x));
            let w = f64::from(params.columns.width_of(col));
            for row in start_row..=end_row {
                let y = f64::from(viewport.row_top(row));
                let h = f64::from(ROW_HEIGHT);

                ctx.save();
                ctx.begin_path();
                ctx.rect(x, y, w, h);
                ctx.clip();

                let in_range = range_bounds.is_some_and(|(r0, c0, r1, c1)| {
                    row >= r0 && row <= r1 && col >= c0 && col <= c1
                });
                if in_range {
                    ctx.set_fill_style_str(colors::RANGE_FILL);
                    ctx.fill_rect(x, y, w, h);
                }

                let value = params.store.get(row, col);
                if !value.is_empty() {
                    ctx.set_fill_style_str(colors::CELL_TEXT);
                    let _ = ctx.fill_text(value, x + CELL_PADDING, y + h / 2.0);
                }

                ctx.restore();

                let addr = CellAddr::new(row, col);
                let outlined =
                    selected_cell == Some(addr) || params.edit_target == Some(addr);
                if outlined {
                    ctx.set_stroke_style_str(colors::SELECTION);
                    ctx.set_line_width(2.0);
                    ctx.stroke_rect(x, y, w, h);
                }
            }
        }
    }

    /// Border and corner fill handle around an active range selection.
    fn draw_range_overlay(&self, params: &RenderParams<'_>) {
        let Some(Selection::Range(range)) = params.selection else {
            return;
        };
        let rect = selection_rect(range, params.columns, params.viewport);

        let ctx = &self.ctx;
        ctx.set_stroke_style_str(colors::SELECTION);
        ctx.set_line_width(2.0);
        ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);

        let (hx, hy) = handle_center(&rect);
        ctx.set_fill_style_str(colors::SELECTION);
        let half = HANDLE_SIZE / 2.0;
        ctx.fill_rect(hx - half, hy - half, HANDLE_SIZE, HANDLE_SIZE);
    }
}

impl RenderBackend for CanvasRenderer {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn render(&mut self, params: &RenderParams<'_>) -> Result<()> {
        self.draw_grid(params);
        render_column_headers(&self.ctx, params.columns, params.viewport);
        render_row_headers(&self.ctx, params.viewport);
        self.draw_cells(params);
        self.draw_range_overlay(params);
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
