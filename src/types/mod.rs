//! Core data types shared across the view model and renderer.

mod cell;
mod selection;

pub use cell::CellAddr;
pub use selection::{RangeSelection, Selection};

/// Exclusive interaction mode of the pointer state machine.
///
/// Entered only from `Idle` on pointer-down; pointer-up always returns to
/// `Idle`. Modeling the modes as one tagged enum makes the illegal
/// "dragging while resizing" combinations unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// No pointer button held.
    #[default]
    Idle,
    /// Extending a range selection from its anchor.
    DraggingRange,
    /// Live-resizing the recorded column.
    ResizingColumn(u32),
    /// Growing/shrinking an existing range via its corner handle.
    ResizingRangeCorner,
}

/// Cursor shape hint emitted by pointer-move while idle.
///
/// Pure presentation feedback, not a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    ColResize,
}

impl CursorHint {
    /// CSS cursor name for this hint.
    pub fn css(self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::ColResize => "col-resize",
        }
    }
}
