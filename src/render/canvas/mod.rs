//! Canvas 2D rendering backend.
//!
//! Implements the RenderBackend trait using the HTML Canvas 2D API via web-sys.

mod headers;
mod renderer;

pub use renderer::CanvasRenderer;
