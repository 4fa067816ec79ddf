//! Core domain types for time-series crossing detection.
//!
//! This crate provides the fundamental types shared by the detection layer:
//! - `SeriesPair`: a validated pair of equal-length time series
//! - `normalize`: magnitude-dependent precision normalization for
//!   noise-tolerant comparison of nearly-equal values

pub mod error;
pub mod precision;
pub mod series;

pub use error::{CoreError, Result};
pub use precision::{decimal_places, normalize};
pub use series::SeriesPair;
