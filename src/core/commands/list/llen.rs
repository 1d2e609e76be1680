// src/core/commands/list/llen.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `LLEN` command.
#[derive(Debug, Clone, Default)]
pub struct LLen {
    pub key: Bytes,
}

impl CommandSpec for LLen {
    fn name(&self) -> &'static str {
        "LLEN"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
}
