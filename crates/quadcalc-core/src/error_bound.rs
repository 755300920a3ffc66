//! Composite error bounds.
//!
//! The bounds are the closed-form asymptotic terms for the composite rules,
//! evaluated once at the midpoint of the whole interval rather than summed
//! over segments.

use serde::{Deserialize, Serialize};

use crate::constants::{SIMPSON_COMPOSITE_DENOMINATOR, TRAPEZIUM_ERROR_DENOMINATOR};
use crate::registry::Derivatives;
use crate::segment::Interval;

/// `-((b - a)^3 / (12 N^2)) * f''(m)` with `m` the midpoint of `[a, b]`.
#[must_use]
pub fn trapezium_composite_error(f: &Derivatives, interval: &Interval, segments: u64) -> f64 {
    let n = segments as f64;
    -((interval.width().powi(3) / (TRAPEZIUM_ERROR_DENOMINATOR * n.powi(2)))
        * (f.second)(interval.midpoint()))
}

/// `-((b - a)^5 / (180 N^4)) * f''''(m)` with `m` the midpoint of `[a, b]`.
#[must_use]
pub fn simpson_composite_error(f: &Derivatives, interval: &Interval, segments: u64) -> f64 {
    let n = segments as f64;
    -((interval.width().powi(5) / (SIMPSON_COMPOSITE_DENOMINATOR * n.powi(4)))
        * (f.fourth)(interval.midpoint()))
}

/// Composite error bounds of both rules for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorBounds {
    /// Trapezium composite error.
    pub trapezium: f64,
    /// Simpson composite error.
    pub simpson: f64,
}

impl ErrorBounds {
    /// Evaluate both bounds for `segments` segments over `interval`.
    #[must_use]
    pub fn estimate(f: &Derivatives, interval: &Interval, segments: u64) -> Self {
        Self {
            trapezium: trapezium_composite_error(f, interval, segments),
            simpson: simpson_composite_error(f, interval, segments),
        }
    }
}
