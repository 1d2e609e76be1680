// src/core/commands/list/lset.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `LSET` command. The server rejects an out-of-range index.
#[derive(Debug, Clone, Default)]
pub struct LSet {
    pub key: Bytes,
    pub index: i64,
    pub value: Bytes,
}

impl CommandSpec for LSet {
    fn name(&self) -> &'static str {
        "LSET"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            self.index.to_string().into(),
            self.value.clone(),
        ]
    }
}
