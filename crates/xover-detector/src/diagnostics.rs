//! Per-index diagnostic trace.

use serde::{Deserialize, Serialize};

/// Classification state at one interior index.
///
/// Produced by `CrossingDetector::info()` for introspection and for
/// asserting the mutual-exclusion invariants over a whole series; it never
/// feeds back into the scan itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Interior index this record describes.
    pub index: usize,
    /// Raw fast-series value at the index.
    pub value: f64,
    /// Fast >= slow at all three window positions (normalized).
    pub parallel_above: bool,
    /// Fast <= slow at all three window positions (normalized).
    pub parallel_below: bool,
    /// Window slope <= 0.
    pub negative_slope: bool,
    /// Window slope >= 0.
    pub positive_slope: bool,
    /// Golden-crossing predicate at this index.
    pub golden_crossing: bool,
    /// Death-crossing predicate at this index.
    pub death_crossing: bool,
    /// Sanity flag: both crossing predicates at once (must never happen).
    pub both_crossings: bool,
    /// Sanity flag: both parallel flags at once (flat touching window only).
    pub above_and_below: bool,
    /// Sanity flag: both slope flags at once (exactly-zero slope only).
    pub negative_and_positive: bool,
}
