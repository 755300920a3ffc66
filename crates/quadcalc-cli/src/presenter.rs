//! CLI result presenter.

use quadcalc_core::options::RunConfig;
use quadcalc_orchestration::interfaces::{IntegrandReport, ResultPresenter};

use crate::output::{
    format_duration, format_error, format_millis, format_number, format_report_line, format_sum,
};
use crate::ui::{print_error, print_title};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    /// Create a presenter; `quiet` wins over `verbose` for report lines.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Lines printed for the run header.
    #[must_use]
    pub fn header_lines(config: &RunConfig) -> Vec<String> {
        let interval = config.interval;
        vec![
            format!("Number of processes: {}", config.threads),
            String::new(),
            format!("Segment Count: {}", format_number(config.segments)),
            format!("Testing Interval: {}", config.step()),
            String::new(),
            format!(
                "Testing functions on step [{},{}]:",
                interval.lower(),
                interval.upper()
            ),
            String::new(),
        ]
    }

    /// Result lines printed for one report, below its title.
    #[must_use]
    pub fn report_lines(&self, report: &IntegrandReport) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Trapezium result:   {} | error: {}",
                format_sum(report.trapezium.sum),
                format_error(report.trapezium.error)
            ),
            format!(
                "Simpson result:     {} | error: {}",
                format_sum(report.simpson.sum),
                format_error(report.simpson.error)
            ),
            format!("Calculation time: {}", format_millis(report.duration)),
        ];
        if self.verbose {
            lines.push(format!("Precise time: {}", format_duration(report.duration)));
        }
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_header(&self, config: &RunConfig) {
        if self.quiet {
            return;
        }
        for line in Self::header_lines(config) {
            println!("{line}");
        }
    }

    fn present_report(&self, report: &IntegrandReport) {
        if self.quiet {
            println!("{}", format_report_line(report));
            return;
        }

        print_title(&format!("Function: {}", report.label));
        println!();
        for line in self.report_lines(report) {
            println!("{line}");
        }
        println!();
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
