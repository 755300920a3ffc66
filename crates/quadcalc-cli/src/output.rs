//! CLI output formatting.

use std::time::Duration;

use quadcalc_orchestration::interfaces::IntegrandReport;

/// Format an integral estimate.
#[must_use]
pub fn format_sum(value: f64) -> String {
    format!("{value:.10}")
}

/// Format an error bound in scientific notation.
#[must_use]
pub fn format_error(value: f64) -> String {
    format!("{value:.6e}")
}

/// Format a duration as whole milliseconds.
#[must_use]
pub fn format_millis(d: Duration) -> String {
    format!("{} ms", d.as_millis())
}

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// One whitespace-separated line per report:
/// `name trapezium_sum trapezium_error simpson_sum simpson_error millis`.
#[must_use]
pub fn format_report_line(report: &IntegrandReport) -> String {
    format!(
        "{} {} {} {} {} {}",
        report.integrand.name(),
        format_sum(report.trapezium.sum),
        format_error(report.trapezium.error),
        format_sum(report.simpson.sum),
        format_error(report.simpson.error),
        report.duration.as_millis(),
    )
}

/// Render reports as a pretty-printed JSON array.
pub fn reports_to_json(reports: &[IntegrandReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
