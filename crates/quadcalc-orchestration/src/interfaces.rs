//! Orchestration interfaces.

use std::time::Duration;

use serde::{Serialize, Serializer};

use quadcalc_core::options::RunConfig;
use quadcalc_core::reduction::QuadratureResult;
use quadcalc_core::registry::Integrand;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the run parameters before any integrand is evaluated.
    fn present_header(&self, config: &RunConfig);

    /// Present the report of one integrand.
    fn present_report(&self, report: &IntegrandReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of evaluating one integrand with both rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrandReport {
    /// Integrand that was evaluated.
    pub integrand: Integrand,
    /// Report label of the integrand.
    pub label: &'static str,
    /// Trapezium sum and composite error.
    pub trapezium: QuadratureResult,
    /// Simpson sum and composite error.
    pub simpson: QuadratureResult,
    /// Wall-clock time of the two reductions.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_nanos() as f64 / 1e6)
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_header(&self, _config: &RunConfig) {}
    fn present_report(&self, _report: &IntegrandReport) {}
    fn present_error(&self, _error: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> IntegrandReport {
        IntegrandReport {
            integrand: Integrand::Exponential,
            label: Integrand::Exponential.label(),
            trapezium: QuadratureResult {
                sum: 1.75,
                error: -0.25,
            },
            simpson: QuadratureResult {
                sum: 1.5,
                error: -0.125,
            },
            duration: Duration::from_millis(12),
        }
    }

    #[test]
    fn null_presenter() {
        let presenter = NullPresenter;
        presenter.present_header(&RunConfig::default());
        presenter.present_report(&sample_report());
        presenter.present_error("ignored");
    }

    #[test]
    fn report_serializes_duration_as_millis() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["integrand"], "exponential");
        assert_eq!(json["label"], "e^x dx");
        assert_eq!(json["trapezium"]["sum"], 1.75);
        assert_eq!(json["simpson"]["error"], -0.125);
        assert_eq!(json["elapsed_ms"], 12.0);
        assert!(json.get("duration").is_none());
    }
}
