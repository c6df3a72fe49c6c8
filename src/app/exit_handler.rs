//! Exit code logic for the archiver process.
//!
//! Single responsibility: map fatal input outcomes to the process exit status.

use archiver_core::InputError;

use crate::ProcessExit;

/// Determines the exit status for an input loading failure.
///
/// An input file with no URLs is a normal (if empty) run; a missing or
/// unreadable file is a failure.
pub(crate) fn exit_for_input_error(error: &InputError) -> ProcessExit {
    match error {
        InputError::Empty { .. } => ProcessExit::Success,
        InputError::Missing { .. } | InputError::Read { .. } => ProcessExit::Failure,
    }
}
