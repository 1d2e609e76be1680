// src/core/commands/list/pushx.rs

//! Implements the `LPUSHX` and `RPUSHX` commands, which push only when the
//! key already exists and holds a list.

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct LPushX {
    pub key: Bytes,
    pub value: Bytes,
}

impl CommandSpec for LPushX {
    fn name(&self) -> &'static str {
        "LPUSHX"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone(), self.value.clone()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct RPushX {
    pub key: Bytes,
    pub value: Bytes,
}

impl CommandSpec for RPushX {
    fn name(&self) -> &'static str {
        "RPUSHX"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone(), self.value.clone()]
    }
}
