//! Build errors for passcode machines.

use thiserror::Error;

/// Errors that can occur when configuring or building a passcode machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Passcode length must be between 1 and {max} (got {0})", max = crate::core::MAX_PASSCODE_LENGTH)]
    InvalidLength(usize),

    #[error("Invalid passcode configuration: {0}")]
    InvalidConfig(String),
}
