//! gridview - canvas spreadsheet grid for the web
//!
//! An unbounded, lazily-populated spreadsheet grid rendered in the browser
//! via WebAssembly and Canvas 2D:
//! - Pixel-accurate hit testing over variable-width columns
//! - Cell and range selection with a drag handle and live column resize
//! - Scroll-driven page fetching from a JSON record endpoint
//! - Sum/average/min/max aggregation over the selected range
//! - Direct cell editing from the keyboard
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const view = new GridView(canvas, 'https://example.com/records');
//! ```
//!
//! The coordinate math, state machine, cell store, and aggregation all live
//! in plain Rust modules with no DOM dependencies, so they compile and test
//! on the host; only [`viewer`] and the canvas backend are wasm32-specific.

pub mod error;
pub mod grid;
pub mod layout;
pub mod render;
pub mod stats;
pub mod store;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

// Re-export the main view struct
#[cfg(target_arch = "wasm32")]
pub use viewer::GridView;

pub use error::{GridError, Result};
pub use grid::{GridState, PageRequest, PAGE_SIZE};
pub use types::{CellAddr, RangeSelection, Selection};

/// Crate version, exposed to JavaScript for cache busting.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
