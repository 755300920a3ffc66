//! Application configuration from CLI flags.
//!
//! The flags only control presentation. The run itself (interval, segment
//! count, worker count) is fixed by [`RunConfig::default`].

use clap::Parser;

use quadcalc_core::options::RunConfig;

/// Parallel numerical integration with the Trapezium and Simpson rules.
#[derive(Parser, Debug)]
#[command(name = "quadcalc", version, about)]
pub struct AppConfig {
    /// Verbose output (debug logging and precise timings).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (one result line per integrand).
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print the results as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parameters of the integration run.
    #[must_use]
    pub fn run_config(&self) -> RunConfig {
        RunConfig::default()
    }

    /// Default log level for the tracing subscriber.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
