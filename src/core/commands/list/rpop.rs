// src/core/commands/list/rpop.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `RPOP` command.
#[derive(Debug, Clone, Default)]
pub struct RPop {
    pub key: Bytes,
}

impl CommandSpec for RPop {
    fn name(&self) -> &'static str {
        "RPOP"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
}
