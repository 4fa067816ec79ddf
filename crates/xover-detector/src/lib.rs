//! Golden/death crossing detection between two aligned time series.
//!
//! Given a fast-responding series and a slower-responding reference (e.g., a
//! price and its moving average), finds the indices where the fast series
//! crosses up through the reference ("golden") or down through it ("death").
//!
//! The classification at each interior index is a windowed test: a 3-point
//! neighborhood is compared on precision-normalized values to rule out
//! parallel segments and establish the slope direction, then the raw values
//! at the midpoint decide which side the fast series has moved to.

pub mod detector;
pub mod diagnostics;
pub mod result;
pub mod window;

pub use detector::CrossingDetector;
pub use diagnostics::DiagnosticRecord;
pub use result::CrossingResult;
pub use window::Window;
