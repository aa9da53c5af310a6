//! Error handling and exit codes.

use rootcalc_core::calculator::RootError;
use rootcalc_core::constants::exit_codes;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &RootError) -> i32 {
    match err {
        RootError::Domain { .. } => exit_codes::ERROR_DOMAIN,
        RootError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        RootError::Config(_) => exit_codes::ERROR_CONFIG,
        RootError::Parse(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Map any application error to its exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<RootError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
