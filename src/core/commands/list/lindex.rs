// src/core/commands/list/lindex.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `LINDEX` command. Negative indices count from the tail.
#[derive(Debug, Clone, Default)]
pub struct LIndex {
    pub key: Bytes,
    pub index: i64,
}

impl CommandSpec for LIndex {
    fn name(&self) -> &'static str {
        "LINDEX"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone(), self.index.to_string().into()]
    }
}
