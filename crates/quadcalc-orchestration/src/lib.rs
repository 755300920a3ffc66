//! # quadcalc-orchestration
//!
//! Runs every configured integrand through the reduction driver, times the
//! reductions, and hands the reports to a presenter.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{IntegrandReport, ResultPresenter};
pub use orchestrator::{evaluate_integrand, run, run_with_presenter};
