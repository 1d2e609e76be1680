// src/core/commands/list/lrem.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `LREM` command.
///
/// The sign of `count` selects the search direction and scope on the server:
/// positive removes head-to-tail up to `count` matches, negative removes
/// tail-to-head, zero removes all occurrences.
#[derive(Debug, Clone, Default)]
pub struct LRem {
    pub key: Bytes,
    pub count: i64,
    pub value: Bytes,
}

impl CommandSpec for LRem {
    fn name(&self) -> &'static str {
        "LREM"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            self.count.to_string().into(),
            self.value.clone(),
        ]
    }
}
