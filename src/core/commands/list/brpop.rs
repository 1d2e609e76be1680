// src/core/commands/list/brpop.rs

//! Implements the `BRPOP` command.

use crate::core::BerylError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::list::logic::validate_timeout;
use bytes::Bytes;

/// Represents the `BRPOP` command with its validated arguments.
#[derive(Debug, Clone, Default)]
pub struct BRPop {
    pub keys: Vec<Bytes>,
    pub timeout: i64,
}

impl BRPop {
    /// Builds a `BRPOP` over one or more keys. Same timeout contract as
    /// `BLPop`, popping from the tail instead of the head.
    pub fn new(key: Bytes, more_keys: Vec<Bytes>, timeout: i64) -> Result<Self, BerylError> {
        validate_timeout(timeout)?;
        let mut keys = Vec::with_capacity(1 + more_keys.len());
        keys.push(key);
        keys.extend(more_keys);
        Ok(BRPop { keys, timeout })
    }
}

impl CommandSpec for BRPop {
    fn name(&self) -> &'static str {
        "BRPOP"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = self.keys.clone();
        args.push(self.timeout.to_string().into());
        args
    }
}
