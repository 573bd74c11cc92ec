//! Numeric summary over the active range.
//!
//! Cells are parsed with a parse-or-skip contract: anything that is not a
//! valid `f64` is silently excluded from the aggregate, never an error.

use crate::store::CellStore;
use crate::types::RangeSelection;

/// Aggregate over the successfully parsed cells of a range.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct RangeStats {
    pub sum: f64,
    pub count: u32,
    /// `None` when no cell parsed as a number.
    pub min: Option<f64>,
    /// `None` when no cell parsed as a number.
    pub max: Option<f64>,
}

impl RangeStats {
    /// Scan every cell in the normalized rectangle of `range`.
    pub fn compute(store: &CellStore, range: &RangeSelection) -> Self {
        let (min_row, min_col, max_row, max_col) = range.bounds();
        let mut stats = RangeStats::default();

        for row in min_row..=max_row {
            for col in min_col..=max_col {
                let Ok(value) = store.get(row, col).trim().parse::<f64>() else {
                    continue;
                };
                stats.sum += value;
                stats.count += 1;
                stats.min = Some(stats.min.map_or(value, |m| m.min(value)));
                stats.max = Some(stats.max.map_or(value, |m| m.max(value)));
            }
        }
        stats
    }

    /// `sum / count`, or 0 for an empty aggregate.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / f64::from(self.count)
        }
    }

    /// Display text for the stats panel. Min/max show "N/A" when nothing
    /// parsed.
    pub fn summary(&self) -> String {
        let fmt = |v: Option<f64>| v.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"));
        format!(
            "Sum: {:.2} | Average: {:.2} | Smallest: {} | Greatest: {}",
            self.sum,
            self.average(),
            fmt(self.min),
            fmt(self.max),
        )
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::{CellAddr, RangeSelection};

    fn range(r1: u32, c1: u32, r2: u32, c2: u32) -> RangeSelection {
        RangeSelection::new(CellAddr::new(r1, c1), CellAddr::new(r2, c2))
    }

    #[test]
    fn skips_non_numeric_cells() {
        let mut store = CellStore::new();
        store.set(0, 0, "1");
        store.set(0, 1, "2");
        store.set(1, 0, "3");
        store.set(1, 1, "x");
        store.set(2, 0, "5");
        store.set(2, 1, "6");

        let stats = RangeStats::compute(&store, &range(0, 0, 2, 1));
        assert_eq!(stats.sum, 17.0);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.max, Some(6.0));
    }

    #[test]
    fn empty_range_reports_sentinels() {
        let store = CellStore::new();
        let stats = RangeStats::compute(&store, &range(0, 0, 3, 3));

        assert_eq!(stats.count, 0);
        assert_eq!(stats.average(), 0.0);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(
            stats.summary(),
            "Sum: 0.00 | Average: 0.00 | Smallest: N/A | Greatest: N/A"
        );
    }

    #[test]
    fn reversed_range_normalizes_for_aggregation() {
        let mut store = CellStore::new();
        store.set(0, 0, "4");
        store.set(2, 2, "8");

        let stats = RangeStats::compute(&store, &range(2, 2, 0, 0));
        assert_eq!(stats.sum, 12.0);
        assert_eq!(stats.count, 2);
    }
}
