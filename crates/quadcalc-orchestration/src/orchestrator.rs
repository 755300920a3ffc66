//! Core orchestration: per-integrand reductions, timing, and reporting.

use std::time::Instant;

use tracing::{debug, debug_span, info, warn};

use quadcalc_core::error::QuadError;
use quadcalc_core::error_bound::ErrorBounds;
use quadcalc_core::options::RunConfig;
use quadcalc_core::pool::WorkerPool;
use quadcalc_core::reduction::{reduce_both, QuadratureResult};
use quadcalc_core::registry::Integrand;
use quadcalc_core::segment::SegmentPlan;

use crate::interfaces::{IntegrandReport, NullPresenter, ResultPresenter};

/// Evaluate every configured integrand, in order.
pub fn run(config: &RunConfig, pool: &WorkerPool) -> Result<Vec<IntegrandReport>, QuadError> {
    run_with_presenter(config, pool, &NullPresenter)
}

/// Evaluate every configured integrand, presenting each report as soon as it is ready.
pub fn run_with_presenter(
    config: &RunConfig,
    pool: &WorkerPool,
    presenter: &dyn ResultPresenter,
) -> Result<Vec<IntegrandReport>, QuadError> {
    config.validate()?;
    let plan = config.plan()?;

    if pool.threads() != config.threads {
        debug!(
            configured = config.threads,
            actual = pool.threads(),
            "Worker pool size differs from configuration"
        );
    }

    let mut reports = Vec::with_capacity(config.integrands.len());
    for &integrand in &config.integrands {
        let report = evaluate_integrand(integrand, &plan, pool);
        presenter.present_report(&report);
        reports.push(report);
    }
    Ok(reports)
}

/// Run both reductions for `integrand` and attach the composite error bounds.
///
/// Only the two reductions are timed; the error bounds are computed after
/// the clock stops.
pub fn evaluate_integrand(
    integrand: Integrand,
    plan: &SegmentPlan,
    pool: &WorkerPool,
) -> IntegrandReport {
    let _span = debug_span!("integrand", name = integrand.name()).entered();
    let interval = plan.interval();

    if !integrand.supports(&interval) {
        warn!(
            integrand = integrand.name(),
            lower = interval.lower(),
            upper = interval.upper(),
            "Interval exceeds the integrand's domain; sums will be NaN"
        );
    }

    let f = integrand.derivatives();

    let start = Instant::now();
    let sums = reduce_both(pool, plan, &f);
    let duration = start.elapsed();

    let bounds = ErrorBounds::estimate(&f, &interval, plan.segments());
    if !integrand.has_exact_derivatives() {
        warn!(
            integrand = integrand.name(),
            "Registered derivatives are not analytic; error bounds are approximate"
        );
    }

    info!(
        integrand = integrand.name(),
        segments = plan.segments(),
        elapsed_ms = duration.as_millis(),
        "Integrand evaluated"
    );

    IntegrandReport {
        integrand,
        label: integrand.label(),
        trapezium: QuadratureResult {
            sum: sums.trapezium,
            error: bounds.trapezium,
        },
        simpson: QuadratureResult {
            sum: sums.simpson,
            error: bounds.simpson,
        },
        duration,
    }
}
