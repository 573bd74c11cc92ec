/// A logical cell address: zero-based (row, column).
///
/// The address space is unbounded in both dimensions; only a lazily
/// populated subset of cells has content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddr {
    pub row: u32,
    pub col: u32,
}

impl CellAddr {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}
