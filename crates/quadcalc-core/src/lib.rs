//! # quadcalc-core
//!
//! Core library for the QuadCalc-rs numerical integration calculator.
//! Implements the Trapezium and Simpson composite rules over a fixed set of
//! integrands, their closed-form error bounds, and a parallel reduction
//! driver backed by a rayon worker pool.

pub mod constants;
pub mod error;
pub mod error_bound;
pub mod options;
pub mod pool;
pub mod reduction;
pub mod registry;
pub mod rule;
pub mod segment;

// Re-exports
pub use constants::{exit_codes, DEFAULT_LOWER, DEFAULT_SEGMENTS, DEFAULT_UPPER};
pub use error::QuadError;
pub use error_bound::ErrorBounds;
pub use options::RunConfig;
pub use pool::WorkerPool;
pub use reduction::{QuadratureResult, ReductionSums};
pub use registry::{Derivatives, Integrand};
pub use rule::{QuadratureRule, Simpson, Trapezium};
pub use segment::{Interval, Segment, SegmentPlan};

/// Integrate `integrand` over `[lower, upper]` with `segments` Simpson segments
/// on an existing `pool`.
///
/// # Example
/// ```
/// use quadcalc_core::{Integrand, WorkerPool};
///
/// let pool = WorkerPool::new(2).unwrap();
/// let area = quadcalc_core::integrate(&pool, Integrand::Exponential, 0.0, 1.0, 1_000).unwrap();
/// assert!((area - (std::f64::consts::E - 1.0)).abs() < 1e-10);
///
/// // The same pool serves every call.
/// let gauss = quadcalc_core::integrate(&pool, Integrand::Gaussian, 0.0, 1.0, 1_000).unwrap();
/// assert!((gauss - 0.746_824_132_812_427).abs() < 1e-10);
/// ```
pub fn integrate(
    pool: &WorkerPool,
    integrand: Integrand,
    lower: f64,
    upper: f64,
    segments: u64,
) -> Result<f64, QuadError> {
    let plan = SegmentPlan::new(Interval::new(lower, upper)?, segments)?;
    Ok(reduction::integrate(pool, &plan, integrand, &Simpson).sum)
}
