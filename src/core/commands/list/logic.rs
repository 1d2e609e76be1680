// src/core/commands/list/logic.rs

// Shared validation for the blocking list commands.

use crate::core::BerylError;

/// Blocking commands take a non-negative timeout in whole seconds; zero
/// blocks indefinitely. Checked before any frame is built, so a bad timeout
/// never reaches the wire.
pub(crate) fn validate_timeout(timeout: i64) -> Result<(), BerylError> {
    if timeout < 0 {
        return Err(BerylError::InvalidArgument(
            "timeout must be greater equal 0".to_string(),
        ));
    }
    Ok(())
}
