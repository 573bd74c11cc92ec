//! The grid view model: owned application state plus the pointer, wheel,
//! and keyboard state machine.
//!
//! Everything here is pure Rust with no DOM dependencies, so the whole
//! interaction contract is testable on the host. The wasm viewer shell
//! translates browser events into these calls and redraws afterwards.

mod editing;

use crate::layout::{ColumnLayout, Viewport, HEADER_HEIGHT, RESIZE_TOLERANCE};
use crate::stats::RangeStats;
use crate::store::CellStore;
use crate::types::{CellAddr, CursorHint, InteractionMode, RangeSelection, Selection};

/// Rows requested from the data source per page.
pub const PAGE_SIZE: u32 = 100;

/// A page the view model wants fetched from the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index.
    pub page: u32,
}

impl PageRequest {
    /// First row index this page's records land on.
    pub fn start_row(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(PAGE_SIZE)
    }
}

/// All mutable grid state, single-owner and passed by reference into every
/// event handler. Each handler leaves the state internally consistent
/// before returning; the next event may arrive with no guarantees beyond
/// strict serialization.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    pub store: CellStore,
    pub columns: ColumnLayout,
    pub viewport: Viewport,
    pub selection: Option<Selection>,
    /// The cell currently accepting keystrokes; always the selected cell
    /// while editing is active.
    pub edit_target: Option<CellAddr>,
    pub mode: InteractionMode,
    /// Last computed aggregate; kept until the next range finalizes.
    pub stats: Option<RangeStats>,
    page_no: u32,
    source_exhausted: bool,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell under screen (x, y), or `None` over the header band or the
    /// row gutter.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<CellAddr> {
        let col = self.columns.column_at(x, self.viewport.scroll_x)?;
        let row = self.viewport.row_at(y)?;
        Some(CellAddr::new(row, col))
    }

    /// Select a single cell, clearing any range (mutual exclusivity).
    pub fn select_cell(&mut self, addr: CellAddr) {
        self.selection = Some(Selection::Cell(addr));
    }

    /// Pointer-button press. Transitions out of `Idle` only; the priority
    /// order is: range corner handle, then header column-edge resize, then
    /// header click, then body click.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.mode != InteractionMode::Idle {
            return;
        }

        if let Some(Selection::Range(range)) = self.selection {
            if self.hits_corner_handle(&range, x, y) {
                self.mode = InteractionMode::ResizingRangeCorner;
                return;
            }
        }

        if y <= HEADER_HEIGHT {
            let Some(col) = self.columns.column_at(x, self.viewport.scroll_x) else {
                return;
            };
            let right = self.columns.right_edge(col, self.viewport.scroll_x);
            if (x - right).abs() <= RESIZE_TOLERANCE {
                self.mode = InteractionMode::ResizingColumn(col);
                return;
            }
            // Header click away from an edge: anchor on the first visible
            // row of that column and start a drag like a body click.
            let (first_row, _) = self.viewport.visible_rows();
            self.begin_cell_drag(CellAddr::new(first_row, col));
            return;
        }

        // Presses left of column 0 (the row gutter) resolve to no column
        // and are ignored.
        if let Some(addr) = self.cell_at(x, y) {
            self.begin_cell_drag(addr);
        }
    }

    /// Pointer movement. Dispatches purely on the current mode and returns
    /// the cursor hint for presentation.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> CursorHint {
        match self.mode {
            InteractionMode::DraggingRange | InteractionMode::ResizingRangeCorner => {
                if let Some(end) = self.cell_at(x, y) {
                    self.extend_selection_to(end);
                }
                CursorHint::Default
            }
            InteractionMode::ResizingColumn(col) => {
                let left = self.columns.left_edge(col, self.viewport.scroll_x);
                // set_width clamps to the 50 px minimum.
                self.columns.set_width(col, x - left);
                CursorHint::Default
            }
            InteractionMode::Idle => self.hover_hint(x, y),
        }
    }

    /// Pointer-button release: back to `Idle`, resize target dropped with
    /// the mode, aggregate recomputed.
    pub fn pointer_up(&mut self) {
        self.mode = InteractionMode::Idle;
        self.recompute_stats();
    }

    /// Wheel scroll: move the viewport and, unless the source reported an
    /// empty page, request the next data page (fire-and-forget).
    pub fn wheel(&mut self, delta_x: f32, delta_y: f32) -> Option<PageRequest> {
        self.viewport.scroll_by(delta_x, delta_y);
        self.next_page_request()
    }

    /// Advance the page counter and yield a request, or `None` once the
    /// source is exhausted. The counter never rolls back, even when the
    /// fetch later fails.
    pub fn next_page_request(&mut self) -> Option<PageRequest> {
        if self.source_exhausted {
            return None;
        }
        self.page_no = self.page_no.saturating_add(1);
        Some(PageRequest { page: self.page_no })
    }

    /// Merge a completed page fetch. Runs on a later event-loop turn than
    /// the request, so it must tolerate any edits made in between: the
    /// merge overwrites only its own row range.
    pub fn merge_page(&mut self, request: PageRequest, records: &[String]) {
        if records.is_empty() {
            // Termination policy: an empty page means end of data.
            self.source_exhausted = true;
            return;
        }
        self.store.append_page(request.start_row(), records);
        self.recompute_stats();
    }

    /// Resize the canvas viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    /// Recompute the aggregate over the active range. With no active range
    /// the previous aggregate is kept.
    pub fn recompute_stats(&mut self) {
        let range = match &self.selection {
            Some(Selection::Range(range)) => *range,
            _ => return,
        };
        self.stats = Some(RangeStats::compute(&self.store, &range));
    }

    /// Whether the data source reported an empty page.
    pub fn source_exhausted(&self) -> bool {
        self.source_exhausted
    }

    fn begin_cell_drag(&mut self, addr: CellAddr) {
        self.select_cell(addr);
        self.edit_target = Some(addr);
        self.mode = InteractionMode::DraggingRange;
    }

    /// Move the live selection end to `end`. A cell selection promotes to
    /// a range anchored at that cell; a range keeps its anchor.
    fn extend_selection_to(&mut self, end: CellAddr) {
        match &mut self.selection {
            Some(Selection::Cell(anchor)) => {
                self.selection = Some(Selection::Range(RangeSelection::new(*anchor, end)));
            }
            Some(Selection::Range(range)) => range.set_end(end),
            None => {}
        }
    }

    fn hits_corner_handle(&self, range: &RangeSelection, x: f32, y: f32) -> bool {
        let (_, _, max_row, max_col) = range.bounds();
        let handle_x = self.columns.right_edge(max_col, self.viewport.scroll_x);
        let handle_y = self.viewport.row_top(max_row.saturating_add(1));
        (x - handle_x).abs() <= RESIZE_TOLERANCE && (y - handle_y).abs() <= RESIZE_TOLERANCE
    }

    /// Hover feedback while idle: a resize cursor near a column boundary
    /// in the header band, default everywhere else.
    fn hover_hint(&self, x: f32, y: f32) -> CursorHint {
        if y > HEADER_HEIGHT {
            return CursorHint::Default;
        }
        let Some(col) = self.columns.column_at(x, self.viewport.scroll_x) else {
            return CursorHint::Default;
        };
        let right = self.columns.right_edge(col, self.viewport.scroll_x);
        if (x - right).abs() <= RESIZE_TOLERANCE {
            CursorHint::ColResize
        } else {
            CursorHint::Default
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
    use crate::layout::{DEFAULT_COL_WIDTH, HEADER_WIDTH, MIN_COL_WIDTH, ROW_HEIGHT};

    /// Screen x at the center of `col` (default widths, no scroll).
    fn col_center(col: u32) -> f32 {
        HEADER_WIDTH + DEFAULT_COL_WIDTH * (col as f32) + DEFAULT_COL_WIDTH / 2.0
    }

    /// Screen y at the center of `row` (no scroll).
    fn row_center(row: u32) -> f32 {
        HEADER_HEIGHT + ROW_HEIGHT * (row as f32) + ROW_HEIGHT / 2.0
    }

    #[test]
    fn body_click_selects_cell_and_targets_edit() {
        let mut state = GridState::new();
        state.pointer_down(col_center(1), row_center(2));

        assert_eq!(state.mode, InteractionMode::DraggingRange);
        assert_eq!(
            state.selection,
            Some(Selection::Cell(CellAddr::new(2, 1)))
        );
        assert_eq!(state.edit_target, Some(CellAddr::new(2, 1)));
    }

    #[test]
    fn click_clears_prior_range() {
        let mut state = GridState::new();
        state.selection = Some(Selection::Range(RangeSelection::new(
            CellAddr::new(5, 5),
            CellAddr::new(7, 7),
        )));
        state.pointer_down(col_center(0), row_center(0));

        assert_eq!(
            state.selection,
            Some(Selection::Cell(CellAddr::new(0, 0)))
        );
    }

    #[test]
    fn drag_promotes_cell_to_anchored_range() {
        let mut state = GridState::new();
        state.pointer_down(col_center(1), row_center(1));
        state.pointer_move(col_center(3), row_center(4));

        let range = state.selection.unwrap().range().copied().unwrap();
        assert_eq!(range.anchor(), CellAddr::new(1, 1));
        assert_eq!((range.end_row, range.end_col), (4, 3));

        // Reverse past the anchor: anchor survives, bounds normalize.
        state.pointer_move(col_center(0), row_center(0));
        let range = state.selection.unwrap().range().copied().unwrap();
        assert_eq!(range.anchor(), CellAddr::new(1, 1));
        assert_eq!(range.bounds(), (0, 0, 1, 1));
    }

    #[test]
    fn header_edge_press_enters_column_resize() {
        let mut state = GridState::new();
        let edge = HEADER_WIDTH + DEFAULT_COL_WIDTH; // right edge of col 0
        state.pointer_down(edge - 2.0, HEADER_HEIGHT / 2.0);

        assert_eq!(state.mode, InteractionMode::ResizingColumn(0));

        // Live resize follows the pointer, clamped at the minimum.
        state.pointer_move(HEADER_WIDTH + 30.0, HEADER_HEIGHT / 2.0);
        assert_eq!(state.columns.width_of(0), MIN_COL_WIDTH);
        state.pointer_move(HEADER_WIDTH + 180.0, HEADER_HEIGHT / 2.0);
        assert_eq!(state.columns.width_of(0), 180.0);
    }

    #[test]
    fn header_click_away_from_edge_selects_column_cell() {
        let mut state = GridState::new();
        state.pointer_down(col_center(2), HEADER_HEIGHT / 2.0);

        assert_eq!(state.mode, InteractionMode::DraggingRange);
        assert_eq!(
            state.selection,
            Some(Selection::Cell(CellAddr::new(0, 2)))
        );
    }

    #[test]
    fn corner_handle_press_resumes_existing_range() {
        let mut state = GridState::new();
        let range = RangeSelection::new(CellAddr::new(0, 0), CellAddr::new(2, 2));
        state.selection = Some(Selection::Range(range));

        let handle_x = state.columns.right_edge(2, 0.0);
        let handle_y = HEADER_HEIGHT + 3.0 * ROW_HEIGHT;
        state.pointer_down(handle_x + 3.0, handle_y - 3.0);

        assert_eq!(state.mode, InteractionMode::ResizingRangeCorner);

        // Shrinking toward the origin keeps the stored anchor.
        state.pointer_move(col_center(0), row_center(0));
        let range = state.selection.unwrap().range().copied().unwrap();
        assert_eq!(range.anchor(), CellAddr::new(0, 0));
        assert_eq!(range.bounds(), (0, 0, 0, 0));
    }

    #[test]
    fn pointer_up_returns_to_idle_and_finalizes_stats() {
        let mut state = GridState::new();
        state.store.set(0, 0, "2");
        state.store.set(0, 1, "4");

        state.pointer_down(col_center(0), row_center(0));
        state.pointer_move(col_center(1), row_center(0));
        state.pointer_up();

        assert_eq!(state.mode, InteractionMode::Idle);
        let stats = state.stats.unwrap();
        assert_eq!(stats.sum, 6.0);
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn gutter_press_is_ignored() {
        let mut state = GridState::new();
        state.pointer_down(HEADER_WIDTH / 2.0, row_center(3));

        assert_eq!(state.mode, InteractionMode::Idle);
        assert_eq!(state.selection, None);
    }

    #[test]
    fn hover_near_header_edge_hints_resize() {
        let mut state = GridState::new();
        let edge = HEADER_WIDTH + DEFAULT_COL_WIDTH;

        assert_eq!(
            state.pointer_move(edge - 1.0, HEADER_HEIGHT / 2.0),
            CursorHint::ColResize
        );
        assert_eq!(
            state.pointer_move(col_center(0), HEADER_HEIGHT / 2.0),
            CursorHint::Default
        );
        assert_eq!(
            state.pointer_move(edge - 1.0, row_center(1)),
            CursorHint::Default
        );
    }

    #[test]
    fn wheel_requests_pages_until_exhausted() {
        let mut state = GridState::new();

        let first = state.wheel(0.0, 40.0).unwrap();
        assert_eq!(first.page, 1);
        assert_eq!(first.start_row(), 0);

        let second = state.wheel(0.0, 40.0).unwrap();
        assert_eq!(second.page, 2);
        assert_eq!(second.start_row(), PAGE_SIZE);

        // Empty page flips the termination flag; no further requests.
        state.merge_page(second, &[]);
        assert!(state.source_exhausted());
        assert_eq!(state.wheel(0.0, 40.0), None);

        // Scrolling still works after exhaustion.
        assert!(state.viewport.scroll_y > 0.0);
    }

    #[test]
    fn merge_is_row_addressed_and_preserves_edits_elsewhere() {
        let mut state = GridState::new();
        state.store.set(500, 0, "edited");

        let request = PageRequest { page: 1 };
        state.merge_page(request, &["A: 1".to_string(), "A: 2".to_string()]);

        assert_eq!(state.store.get(0, 0), "1");
        assert_eq!(state.store.get(1, 0), "2");
        assert_eq!(state.store.get(500, 0), "edited");
    }
}
