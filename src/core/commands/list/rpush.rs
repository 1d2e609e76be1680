// src/core/commands/list/rpush.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `RPUSH` command. All values are pushed in one atomic
/// operation, in call order.
#[derive(Debug, Clone, Default)]
pub struct RPush {
    pub key: Bytes,
    pub values: Vec<Bytes>,
}

impl CommandSpec for RPush {
    fn name(&self) -> &'static str {
        "RPUSH"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone()];
        args.extend(self.values.iter().cloned());
        args
    }
}
