//! Parallel reduction driver.
//!
//! Every segment is evaluated independently, so the segment index range is
//! split across the pool's workers. Each worker folds its share into a local
//! partial sum; rayon merges the partial sums at its join points. The
//! result only depends on the partition through floating-point rounding.

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::pool::WorkerPool;
use crate::registry::{Derivatives, Integrand};
use crate::rule::{QuadratureRule, Simpson, Trapezium};
use crate::segment::SegmentPlan;

/// Reduced sum of a rule plus its composite error bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadratureResult {
    /// Sum of per-segment estimates.
    pub sum: f64,
    /// Composite error bound.
    pub error: f64,
}

/// Sums of both rules for one plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionSums {
    /// Trapezium sum.
    pub trapezium: f64,
    /// Simpson sum.
    pub simpson: f64,
}

/// Sum `rule`'s estimate over every segment of `plan` on `pool`.
pub fn reduce<R>(pool: &WorkerPool, plan: &SegmentPlan, f: &Derivatives, rule: &R) -> f64
where
    R: QuadratureRule + ?Sized,
{
    trace!(
        rule = rule.name(),
        segments = plan.segments(),
        threads = pool.threads(),
        "Starting reduction"
    );
    pool.install(|| {
        (1..=plan.segments())
            .into_par_iter()
            .fold(|| 0.0f64, |acc, j| acc + rule.estimate(f, plan.segment(j)))
            .sum::<f64>()
    })
}

/// Single-threaded reference reduction, in segment order.
pub fn reduce_sequential<R>(plan: &SegmentPlan, f: &Derivatives, rule: &R) -> f64
where
    R: QuadratureRule + ?Sized,
{
    plan.iter().map(|segment| rule.estimate(f, segment)).sum()
}

/// Run the Trapezium and Simpson reductions one after the other.
///
/// The two reductions share no partial state.
pub fn reduce_both(pool: &WorkerPool, plan: &SegmentPlan, f: &Derivatives) -> ReductionSums {
    let trapezium = reduce(pool, plan, f, &Trapezium);
    let simpson = reduce(pool, plan, f, &Simpson);
    ReductionSums { trapezium, simpson }
}

/// Reduce `rule` over `plan` for `integrand` and attach the composite error.
pub fn integrate<R>(
    pool: &WorkerPool,
    plan: &SegmentPlan,
    integrand: Integrand,
    rule: &R,
) -> QuadratureResult
where
    R: QuadratureRule + ?Sized,
{
    let f = integrand.derivatives();
    QuadratureResult {
        sum: reduce(pool, plan, &f, rule),
        error: rule.composite_error(&f, &plan.interval(), plan.segments()),
    }
}
