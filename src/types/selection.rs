use super::CellAddr;

/// A rectangular range defined by an anchor and a live end point.
///
/// The anchor (`start_*`) is fixed at the drag origin and the end follows
/// the pointer. Stored un-normalized so a drag that reverses direction
/// keeps its anchor; `bounds()` normalizes at consumption time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSelection {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl RangeSelection {
    /// Create a range anchored at `anchor` with the given live end.
    pub fn new(anchor: CellAddr, end: CellAddr) -> Self {
        Self {
            start_row: anchor.row,
            start_col: anchor.col,
            end_row: end.row,
            end_col: end.col,
        }
    }

    /// The fixed anchor cell.
    pub fn anchor(&self) -> CellAddr {
        CellAddr::new(self.start_row, self.start_col)
    }

    /// Move the live end to `end`, anchor untouched.
    pub fn set_end(&mut self, end: CellAddr) {
        self.end_row = end.row;
        self.end_col = end.col;
    }

    /// Normalized bounds `(min_row, min_col, max_row, max_col)`.
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.start_row.min(self.end_row),
            self.start_col.min(self.end_col),
            self.start_row.max(self.end_row),
            self.start_col.max(self.end_col),
        )
    }
}

/// Current selection: a single cell or a rectangular range.
///
/// The two cases are mutually exclusive by construction; callers hold an
/// `Option<Selection>` for the absent case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Cell(CellAddr),
    Range(RangeSelection),
}

impl Selection {
    /// The active single cell, if this is a cell selection.
    pub fn cell(&self) -> Option<CellAddr> {
        match self {
            Selection::Cell(addr) => Some(*addr),
            Selection::Range(_) => None,
        }
    }

    /// The active range, if this is a range selection.
    pub fn range(&self) -> Option<&RangeSelection> {
        match self {
            Selection::Cell(_) => None,
            Selection::Range(range) => Some(range),
        }
    }
}
