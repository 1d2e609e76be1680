// src/core/commands/helpers.rs

//! Shared helpers for command result post-processing.

use crate::core::BerylError;
use crate::core::protocol::Reply;

/// Collapses a simple-status `+OK` reply into a plain success signal.
///
/// Commands whose only useful outcome is "it worked" (e.g. LTRIM) run their
/// reply through this instead of handing the raw frame to the caller.
pub fn wait_ok(reply: Reply) -> Result<(), BerylError> {
    match reply {
        Reply::SimpleString(s) if s == "OK" => Ok(()),
        other => Err(BerylError::UnexpectedReply(format!("{other:?}"))),
    }
}
