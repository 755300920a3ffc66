//! Application entry point and dispatch.

use anyhow::Result;
use tracing::debug;

use quadcalc_cli::output::reports_to_json;
use quadcalc_cli::presenter::CLIResultPresenter;
use quadcalc_core::pool::WorkerPool;
use quadcalc_orchestration::interfaces::ResultPresenter;
use quadcalc_orchestration::orchestrator::{run as run_integrands, run_with_presenter};

use crate::config::AppConfig;
use crate::errors;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        quadcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let run_config = config.run_config();
    run_config.validate()?;
    let pool = WorkerPool::new(run_config.threads)?;
    debug!(
        threads = pool.threads(),
        segments = run_config.segments,
        "Starting integration run"
    );

    if config.json {
        let reports = run_integrands(&run_config, &pool)?;
        println!("{}", reports_to_json(&reports)?);
        return Ok(());
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_header(&run_config);
    run_with_presenter(&run_config, &pool, &presenter)?;
    Ok(())
}

/// Present a failed run through the CLI presenter and return its exit code.
pub fn present_failure(config: &AppConfig, err: &anyhow::Error) -> i32 {
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_error(&format!("{err:#}"));
    errors::exit_code(err)
}
