//! Error handling and exit codes.

use quadcalc_core::constants::exit_codes;
use quadcalc_core::error::QuadError;

/// Map a run error to its exit code.
pub fn handle_error(err: &QuadError) -> i32 {
    match err {
        QuadError::InvalidInterval { .. } | QuadError::ZeroSegments | QuadError::Config(_) => {
            exit_codes::ERROR_CONFIG
        }
        QuadError::ThreadPool(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error; errors outside the run map to the generic code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<QuadError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
