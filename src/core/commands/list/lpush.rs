// src/core/commands/list/lpush.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `LPUSH` command. All values are pushed in one atomic
/// operation, in call order.
#[derive(Debug, Clone, Default)]
pub struct LPush {
    pub key: Bytes,
    pub values: Vec<Bytes>,
}

impl CommandSpec for LPush {
    fn name(&self) -> &'static str {
        "LPUSH"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone()];
        args.extend(self.values.iter().cloned());
        args
    }
}
