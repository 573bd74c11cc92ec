//! Keyboard handling for in-place cell editing and cell navigation.

use super::GridState;
use crate::types::{CellAddr, Selection};

/// Punctuation accepted into a cell, matching the printable set of the
/// edit contract (letters, digits, and space are accepted separately).
const EDIT_PUNCTUATION: &str = "!@#$%^&*(),.?\":{}|<>";

/// True for a single-character key that may be appended to a cell.
fn is_printable_key(key: &str) -> bool {
    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return false;
    };
    c.is_ascii_alphanumeric() || c == ' ' || EDIT_PUNCTUATION.contains(c)
}

impl GridState {
    /// Handle a key press. Returns `true` when the key was consumed (the
    /// caller should `preventDefault`), `false` when ignored.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" => self.move_selection(-1, 0),
            "ArrowDown" => self.move_selection(1, 0),
            "ArrowLeft" => self.move_selection(0, -1),
            "ArrowRight" => self.move_selection(0, 1),
            "Backspace" => {
                let Some(target) = self.edit_target else {
                    return false;
                };
                let existing = self.store.get(target.row, target.col);
                if existing.is_empty() {
                    // Nothing to delete; do not vivify the row.
                    self.finish_edit(target);
                    return true;
                }
                let mut text = existing.to_string();
                text.pop();
                self.store.set(target.row, target.col, text);
                self.finish_edit(target);
                true
            }
            _ if is_printable_key(key) => {
                let Some(target) = self.edit_target else {
                    return false;
                };
                let mut text = self.store.get(target.row, target.col).to_string();
                text.push_str(key);
                self.store.set(target.row, target.col, text);
                self.finish_edit(target);
                true
            }
            _ => false,
        }
    }

    /// Move the selected cell one step, clamped at the grid origin. Clears
    /// the edit target and collapses any range to the moved cell.
    fn move_selection(&mut self, row_delta: i32, col_delta: i32) -> bool {
        let base = match &self.selection {
            Some(Selection::Cell(addr)) => *addr,
            Some(Selection::Range(range)) => range.anchor(),
            None => return false,
        };
        let row = offset_clamped(base.row, row_delta);
        let col = offset_clamped(base.col, col_delta);
        self.selection = Some(Selection::Cell(CellAddr::new(row, col)));
        self.edit_target = None;
        true
    }

    /// After an accepted edit: drop any range, keep editing the same cell,
    /// and refresh the aggregate.
    fn finish_edit(&mut self, target: CellAddr) {
        self.selection = Some(Selection::Cell(target));
        self.edit_target = Some(target);
        self.recompute_stats();
    }
}

fn offset_clamped(value: u32, delta: i32) -> u32 {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta.unsigned_abs())
    }
}
