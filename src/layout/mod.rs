//! Coordinate mapping between pixels and logical cell addresses.
//!
//! `ColumnLayout` owns per-column widths and the horizontal pixel math;
//! `Viewport` owns scroll offsets and the visible row/column ranges that
//! bound all rendering and hit-testing work.

mod columns;
mod viewport;

pub use columns::ColumnLayout;
pub use viewport::Viewport;

/// Fixed row height in pixels.
pub const ROW_HEIGHT: f32 = 25.0;

/// Height of the column header band in pixels.
pub const HEADER_HEIGHT: f32 = 25.0;

/// Width of the row-number gutter in pixels.
pub const HEADER_WIDTH: f32 = 50.0;

/// Default column width in pixels.
pub const DEFAULT_COL_WIDTH: f32 = 100.0;

/// Minimum column width in pixels; `set_width` clamps to this.
pub const MIN_COL_WIDTH: f32 = 50.0;

/// Hit-test tolerance for resize handles, in pixels on both axes.
pub const RESIZE_TOLERANCE: f32 = 5.0;
