//! QuadCalc-rs library: application logic for the integration calculator.

pub mod app;
pub mod config;
pub mod errors;
