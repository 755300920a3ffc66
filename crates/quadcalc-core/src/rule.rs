//! Quadrature rules.
//!
//! A rule turns one segment into an integral estimate plus a local error
//! term. Rules hold no state, so the reduction driver can evaluate any
//! segment on any worker.

use crate::constants::{SIMPSON_ERROR_DENOMINATOR, TRAPEZIUM_ERROR_DENOMINATOR};
use crate::error_bound::{simpson_composite_error, trapezium_composite_error};
use crate::registry::Derivatives;
use crate::segment::{Interval, Segment};

/// A single-segment quadrature rule.
pub trait QuadratureRule: Send + Sync {
    /// Name of the rule, as shown in reports.
    fn name(&self) -> &'static str;

    /// Integral estimate over `segment`.
    fn estimate(&self, f: &Derivatives, segment: Segment) -> f64;

    /// Local truncation error over `segment`.
    fn error(&self, f: &Derivatives, segment: Segment) -> f64;

    /// Composite error bound for `segments` segments over `interval`.
    fn composite_error(&self, f: &Derivatives, interval: &Interval, segments: u64) -> f64;
}

/// Trapezium rule: `(b - a) * (f(a) + f(b)) / 2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trapezium;

impl QuadratureRule for Trapezium {
    fn name(&self) -> &'static str {
        "Trapezium"
    }

    #[inline]
    fn estimate(&self, f: &Derivatives, segment: Segment) -> f64 {
        segment.width() * (((f.value)(segment.a) + (f.value)(segment.b)) / 2.0)
    }

    fn error(&self, f: &Derivatives, segment: Segment) -> f64 {
        -((segment.width().powi(3) / TRAPEZIUM_ERROR_DENOMINATOR) * (f.second)(segment.midpoint()))
    }

    fn composite_error(&self, f: &Derivatives, interval: &Interval, segments: u64) -> f64 {
        trapezium_composite_error(f, interval, segments)
    }
}

/// Simpson rule: `(b - a) * (f(a) + 4 f(m) + f(b)) / 6`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simpson;

impl QuadratureRule for Simpson {
    fn name(&self) -> &'static str {
        "Simpson"
    }

    #[inline]
    fn estimate(&self, f: &Derivatives, segment: Segment) -> f64 {
        let mid = (segment.a + segment.b) / 2.0;
        segment.width()
            * (((f.value)(segment.a) + 4.0 * (f.value)(mid) + (f.value)(segment.b)) / 6.0)
    }

    fn error(&self, f: &Derivatives, segment: Segment) -> f64 {
        -((segment.width().powi(5) / SIMPSON_ERROR_DENOMINATOR) * (f.fourth)(segment.midpoint()))
    }

    fn composite_error(&self, f: &Derivatives, interval: &Interval, segments: u64) -> f64 {
        simpson_composite_error(f, interval, segments)
    }
}
