// src/core/commands/list/brpoplpush.rs

//! Implements the `BRPOPLPUSH` command.

use crate::core::BerylError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::list::logic::validate_timeout;
use bytes::Bytes;

/// Represents the `BRPOPLPUSH` command: an atomic server-side pop from the
/// tail of `source` and push onto the head of `destination`, blocking until
/// an element is available or the timeout elapses.
#[derive(Debug, Clone, Default)]
pub struct BRPopLPush {
    pub source: Bytes,
    pub destination: Bytes,
    pub timeout: i64,
}

impl BRPopLPush {
    pub fn new(source: Bytes, destination: Bytes, timeout: i64) -> Result<Self, BerylError> {
        validate_timeout(timeout)?;
        Ok(BRPopLPush {
            source,
            destination,
            timeout,
        })
    }
}

impl CommandSpec for BRPopLPush {
    fn name(&self) -> &'static str {
        "BRPOPLPUSH"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.source.clone(),
            self.destination.clone(),
            self.timeout.to_string().into(),
        ]
    }
}
