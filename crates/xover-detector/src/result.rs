//! Crossing scan result.

use serde::{Deserialize, Serialize};

/// Indices where each type of crossing occurs.
///
/// Both lists are strictly increasing and disjoint: the scan visits indices
/// in ascending order and records at most one crossing type per index.
/// Endpoints (0 and `len - 1`) never appear, they have no 3-point window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingResult {
    /// Indices where the fast series crosses up through the reference.
    pub golden: Vec<usize>,
    /// Indices where the fast series crosses down through the reference.
    pub death: Vec<usize>,
}

impl CrossingResult {
    /// True when no crossing of either type was found.
    pub fn is_empty(&self) -> bool {
        self.golden.is_empty() && self.death.is_empty()
    }
}
