//! Crossing detector implementation.
//!
//! Walks every interior index of the series pair and classifies it with the
//! windowed slope/position test. A crossing requires three things at once:
//! the window is not uniformly on one side of the reference (not parallel),
//! the fast series slopes the right way, and the raw midpoint value has
//! already moved to the far side for that direction.
//!
//! Slope and the parallel checks compare normalized values; the final
//! midpoint comparison uses raw values. Do not unify the two bases: the
//! trend tests need noise tolerance, the midpoint test needs true values.

use crate::diagnostics::DiagnosticRecord;
use crate::result::CrossingResult;
use crate::window::Window;
use tracing::{debug, warn};
use xover_core::{normalize, Result, SeriesPair};

/// Detector for golden and death crossings of a fast series relative to a
/// slower reference series.
///
/// Construction validates the input; everything afterwards is a pure
/// function of the stored, immutable pair.
pub struct CrossingDetector {
    pair: SeriesPair,
}

impl CrossingDetector {
    /// Validate the two series and build a detector.
    ///
    /// `fast` is the series being tested for crossings; `slow` is the
    /// reference it is compared against.
    pub fn new(fast: Vec<f64>, slow: Vec<f64>) -> Result<Self> {
        let pair = SeriesPair::new(fast, slow)?;
        debug!(size = pair.len(), "crossing detector initialized");
        Ok(Self { pair })
    }

    /// Build a detector from an already-validated pair.
    pub fn from_pair(pair: SeriesPair) -> Self {
        Self { pair }
    }

    /// The validated series pair.
    pub fn pair(&self) -> &SeriesPair {
        &self.pair
    }

    /// Number of points in each series.
    pub fn len(&self) -> usize {
        self.pair.len()
    }

    /// Never true; a detector always holds at least 3 points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Range guard shared by all per-index classifiers.
    ///
    /// Out-of-range misuse is reported on the log channel and surfaces as
    /// `None` rather than a panic, so a caller scanning past the interior is
    /// not disrupted. The scan driver skips endpoints, so in normal use this
    /// path is unreachable.
    fn checked_index(&self, index: usize) -> Option<usize> {
        if self.pair.is_interior(index) {
            Some(index)
        } else {
            warn!(index, size = self.pair.len(), "bad index: no 3-point window");
            None
        }
    }

    /// The normalized 3-point window at `index`, or `None` when `index` has
    /// no window (endpoint or out of range).
    pub fn window(&self, index: usize) -> Option<Window> {
        let i = self.checked_index(index)?;
        let fast = self.pair.fast();
        let slow = self.pair.slow();
        Some(Window {
            fast: [
                normalize(fast[i - 1]),
                normalize(fast[i]),
                normalize(fast[i + 1]),
            ],
            slow: [
                normalize(slow[i - 1]),
                normalize(slow[i]),
                normalize(slow[i + 1]),
            ],
        })
    }

    /// Whether the window at `index` runs parallel above the reference
    /// (fast >= slow at all three positions, normalized).
    pub fn parallel_above(&self, index: usize) -> Option<bool> {
        Some(self.window(index)?.parallel_above())
    }

    /// Whether the window at `index` runs parallel below the reference
    /// (fast <= slow at all three positions, normalized).
    pub fn parallel_below(&self, index: usize) -> Option<bool> {
        Some(self.window(index)?.parallel_below())
    }

    /// Whether the fast series slopes upward across the window (>= 0).
    ///
    /// A slope of exactly 0.0 satisfies both slope predicates; the crossing
    /// predicates still reject a flat segment via the raw midpoint test.
    pub fn positive_slope(&self, index: usize) -> Option<bool> {
        Some(self.window(index)?.slope() >= 0.0)
    }

    /// Whether the fast series slopes downward across the window (<= 0).
    pub fn negative_slope(&self, index: usize) -> Option<bool> {
        Some(self.window(index)?.slope() <= 0.0)
    }

    /// Whether the fast series is crossing up through the reference at
    /// `index`: the window is not parallel on either side, the slope is
    /// upward, and the raw fast value at `index` is still below the raw
    /// reference value.
    pub fn golden_crossing(&self, index: usize) -> Option<bool> {
        let w = self.window(index)?;
        Some(
            !w.parallel_above()
                && !w.parallel_below()
                && w.slope() >= 0.0
                && self.pair.fast()[index] < self.pair.slow()[index],
        )
    }

    /// Whether the fast series is crossing down through the reference at
    /// `index`: not parallel on either side, downward slope, and the raw
    /// fast value at `index` is still above the raw reference value.
    pub fn death_crossing(&self, index: usize) -> Option<bool> {
        let w = self.window(index)?;
        Some(
            !w.parallel_above()
                && !w.parallel_below()
                && w.slope() <= 0.0
                && self.pair.fast()[index] > self.pair.slow()[index],
        )
    }

    /// Scan every interior index in ascending order and collect crossing
    /// indices. Golden is tested first at each index; a hit advances the
    /// scan without testing death there.
    ///
    /// Recomputes from the immutable pair on every call, so repeated calls
    /// return identical results.
    pub fn perform(&self) -> CrossingResult {
        let mut result = CrossingResult::default();
        for i in self.pair.interior() {
            if self.golden_crossing(i).unwrap_or(false) {
                result.golden.push(i);
                continue;
            }
            if self.death_crossing(i).unwrap_or(false) {
                result.death.push(i);
            }
        }
        debug!(
            golden = result.golden.len(),
            death = result.death.len(),
            "crossing scan complete"
        );
        result
    }

    /// Per-index classification state for every interior index, ascending.
    ///
    /// Observational only; `perform()` does not consult it. The derived
    /// sanity flags exist so callers can assert the mutual-exclusion
    /// invariants over a whole series.
    pub fn info(&self) -> Vec<DiagnosticRecord> {
        self.pair
            .interior()
            .map(|i| {
                let w = self.window(i);
                let parallel_above = w.map(|w| w.parallel_above()).unwrap_or(false);
                let parallel_below = w.map(|w| w.parallel_below()).unwrap_or(false);
                let positive_slope = w.map(|w| w.slope() >= 0.0).unwrap_or(false);
                let negative_slope = w.map(|w| w.slope() <= 0.0).unwrap_or(false);
                let golden_crossing = self.golden_crossing(i).unwrap_or(false);
                let death_crossing = self.death_crossing(i).unwrap_or(false);
                DiagnosticRecord {
                    index: i,
                    value: self.pair.fast()[i],
                    parallel_above,
                    parallel_below,
                    negative_slope,
                    positive_slope,
                    golden_crossing,
                    death_crossing,
                    both_crossings: golden_crossing && death_crossing,
                    above_and_below: parallel_above && parallel_below,
                    negative_and_positive: negative_slope && positive_slope,
                }
            })
            .collect()
    }
}
