//! Validated pair of aligned time series.

use crate::error::{CoreError, Result};
use serde::Serialize;

/// Two equal-length, finite time series: a fast-responding one and the
/// slower-responding reference it is compared against (e.g., a price series
/// and its moving average).
///
/// Immutable after construction. All crossing math reads from this pair.
/// There is no deserialize path: every pair goes through `new`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPair {
    fast: Vec<f64>,
    slow: Vec<f64>,
}

impl SeriesPair {
    /// Validate and store the two series.
    ///
    /// Fails when either series is shorter than 3 points, when the lengths
    /// differ, or when either series contains a non-finite value.
    pub fn new(fast: Vec<f64>, slow: Vec<f64>) -> Result<Self> {
        if fast.len() < 3 || slow.len() < 3 {
            return Err(CoreError::SeriesTooShort {
                fast: fast.len(),
                slow: slow.len(),
            });
        }
        if fast.len() != slow.len() {
            return Err(CoreError::LengthMismatch {
                fast: fast.len(),
                slow: slow.len(),
            });
        }
        Self::check_finite("fast", &fast)?;
        Self::check_finite("slow", &slow)?;
        Ok(Self { fast, slow })
    }

    fn check_finite(name: &'static str, series: &[f64]) -> Result<()> {
        for (index, &value) in series.iter().enumerate() {
            if !value.is_finite() {
                return Err(CoreError::NonFiniteValue {
                    series: name,
                    index,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Number of points in each series (at least 3).
    pub fn len(&self) -> usize {
        self.fast.len()
    }

    /// A `SeriesPair` is never empty; kept for clippy's `len` convention.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The fast-responding series.
    pub fn fast(&self) -> &[f64] {
        &self.fast
    }

    /// The reference series.
    pub fn slow(&self) -> &[f64] {
        &self.slow
    }

    /// Interior indices `1..=len-2`: the only positions where a 3-point
    /// window is defined. Endpoints are never evaluated.
    pub fn interior(&self) -> std::ops::Range<usize> {
        1..self.len() - 1
    }

    /// Whether a 3-point window exists at `index`.
    pub fn is_interior(&self, index: usize) -> bool {
        index >= 1 && index < self.len() - 1
    }
}
