//! QuadCalc-rs: parallel numerical integration calculator.

use quadcalc_lib::{app, config};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing (stderr, so stdout stays parseable); RUST_LOG wins
    // over the flag-derived default.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    if let Err(err) = app::run(&config) {
        std::process::exit(app::present_failure(&config, &err));
    }
}
