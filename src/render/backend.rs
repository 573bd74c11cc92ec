use crate::error::Result;
use crate::layout::{ColumnLayout, Viewport};
use crate::store::CellStore;
use crate::types::{CellAddr, Selection};

/// Everything a backend needs to draw one frame. Borrowed from [`GridState`]
/// so rendering never clones cell data.
///
/// [`GridState`]: crate::grid::GridState
pub struct RenderParams<'a> {
    pub store: &'a CellStore,
    pub columns: &'a ColumnLayout,
    pub viewport: &'a Viewport,
    pub selection: Option<&'a Selection>,
    pub edit_target: Option<CellAddr>,
}

/// Abstraction over the drawing surface.
///
/// The production implementation is [`CanvasRenderer`]; tests can supply a
/// recording backend to assert on draw calls without a DOM.
///
/// [`CanvasRenderer`]: crate::render::canvas::CanvasRenderer
pub trait RenderBackend {
    /// Resize the drawing surface to the given pixel dimensions.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Redraw the whole visible region from scratch.
    fn render(&mut self, params: &RenderParams<'_>) -> Result<()>;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
}
