//! Rendering: the backend trait, pure overlay geometry, and the Canvas 2D
//! implementation (wasm32 only).

pub mod backend;
pub mod selection;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use backend::{RenderBackend, RenderParams};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

/// Convert a 0-based column index to column letters (A, B, ..., Z, AA, AB, ...)
pub fn col_to_letter(col: u32) -> String {
    let mut result = String::new();
    let mut n = col + 1; // Convert to 1-based
    while n > 0 {
        n -= 1;
        let c = char::from(b'A' + u8::try_from(n % 26).unwrap_or(0));
        result.insert(0, c);
        n /= 26;
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn column_letters() {
        assert_eq!(col_to_letter(0), "A");
        assert_eq!(col_to_letter(25), "Z");
        assert_eq!(col_to_letter(26), "AA");
        assert_eq!(col_to_letter(27), "AB");
        assert_eq!(col_to_letter(701), "ZZ");
        assert_eq!(col_to_letter(702), "AAA");
    }
}
