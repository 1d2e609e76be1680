// src/core/commands/list/lpop.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `LPOP` command.
#[derive(Debug, Clone, Default)]
pub struct LPop {
    pub key: Bytes,
}

impl CommandSpec for LPop {
    fn name(&self) -> &'static str {
        "LPOP"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
}
