//! Workspace-level integration test harness for QuadCalc-rs.
//!
//! The tests live in `tests/`; this crate has no library code of its own.
