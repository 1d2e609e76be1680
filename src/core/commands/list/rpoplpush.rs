// src/core/commands/list/rpoplpush.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `RPOPLPUSH` command: the non-blocking form of
/// `BRPopLPush`. Returns the not-found sentinel when `source` is empty.
#[derive(Debug, Clone, Default)]
pub struct RPopLPush {
    pub source: Bytes,
    pub destination: Bytes,
}

impl CommandSpec for RPopLPush {
    fn name(&self) -> &'static str {
        "RPOPLPUSH"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.source.clone(), self.destination.clone()]
    }
}
