// src/core/commands/list/blpop.rs

//! Implements the `BLPOP` command.

use crate::core::BerylError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::list::logic::validate_timeout;
use bytes::Bytes;

/// Represents the `BLPOP` command with its validated arguments.
#[derive(Debug, Clone, Default)]
pub struct BLPop {
    pub keys: Vec<Bytes>,
    pub timeout: i64,
}

impl BLPop {
    /// Builds a `BLPOP` over one or more keys.
    ///
    /// The server blocks until an element is available on any listed key or
    /// the timeout elapses; a timeout of zero blocks forever.
    pub fn new(key: Bytes, more_keys: Vec<Bytes>, timeout: i64) -> Result<Self, BerylError> {
        validate_timeout(timeout)?;
        let mut keys = Vec::with_capacity(1 + more_keys.len());
        keys.push(key);
        keys.extend(more_keys);
        Ok(BLPop { keys, timeout })
    }
}

impl CommandSpec for BLPop {
    fn name(&self) -> &'static str {
        "BLPOP"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = self.keys.clone();
        args.push(self.timeout.to_string().into());
        args
    }
}
