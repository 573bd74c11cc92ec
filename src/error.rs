//! Structured error types for gridview.
//!
//! Keeps `Result<T, String>` out of the codebase; everything fallible
//! returns these types instead.

/// All errors that can occur in the grid view model and renderer.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Rendering error (canvas context acquisition, backend setup).
    #[error("Render error: {0}")]
    Render(String),

    /// Page fetch from the data source failed or returned garbage.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
