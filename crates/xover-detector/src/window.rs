//! Normalized 3-point comparison window.

use serde::{Deserialize, Serialize};

/// The precision-normalized 3-point neighborhood `(i-1, i, i+1)` taken from
/// both series at an interior index.
///
/// `fast[1]` and `slow[1]` are the central values. Normalized values exist
/// only for comparison; they are never written back into the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Normalized fast-series values at `i-1`, `i`, `i+1`.
    pub fast: [f64; 3],
    /// Normalized reference-series values at `i-1`, `i`, `i+1`.
    pub slow: [f64; 3],
}

impl Window {
    /// Fast above or touching the reference at all three positions.
    pub fn parallel_above(&self) -> bool {
        self.fast[0] >= self.slow[0] && self.fast[1] >= self.slow[1] && self.fast[2] >= self.slow[2]
    }

    /// Fast below or touching the reference at all three positions.
    pub fn parallel_below(&self) -> bool {
        self.fast[0] <= self.slow[0] && self.fast[1] <= self.slow[1] && self.fast[2] <= self.slow[2]
    }

    /// Fast-series slope across the window endpoints.
    ///
    /// Consecutive points make the run 1, so the slope is just the rise of
    /// the normalized endpoints.
    pub fn slope(&self) -> f64 {
        self.fast[2] - self.fast[0]
    }
}
