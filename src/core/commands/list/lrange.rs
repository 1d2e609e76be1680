// src/core/commands/list/lrange.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `LRANGE` command. The range is inclusive; negative indices
/// count from the tail.
#[derive(Debug, Clone, Default)]
pub struct LRange {
    pub key: Bytes,
    pub start: i64,
    pub stop: i64,
}

impl CommandSpec for LRange {
    fn name(&self) -> &'static str {
        "LRANGE"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            self.start.to_string().into(),
            self.stop.to_string().into(),
        ]
    }
}
