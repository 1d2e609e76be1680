// src/core/commands/list/lpos.rs

//! Implements the `LPOS` command.

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Represents the `LPOS` command with all its options.
///
/// The three options are independent, but the wire order of the emitted
/// groups is fixed: `RANK`, then `COUNT`, then `MAXLEN`, whichever are
/// present. `to_resp_args` appends them in declaration order, so every
/// presence combination serializes the same way no matter how the call site
/// spelled it.
///
/// Rank 1 is the first match from the head; a negative rank searches from
/// the tail. `COUNT 0` returns every match, which changes the reply shape to
/// an array — callers pick their decode hint accordingly. None of the
/// options are range-checked here; out-of-range values are the server's to
/// reject.
#[derive(Debug, Clone, Default)]
pub struct LPos {
    pub key: Bytes,
    pub element: Bytes,
    pub rank: Option<i64>,
    pub count: Option<i64>,
    pub max_len: Option<i64>,
}

impl CommandSpec for LPos {
    fn name(&self) -> &'static str {
        "LPOS"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone(), self.element.clone()];
        if let Some(r) = self.rank {
            args.extend([Bytes::from_static(b"RANK"), r.to_string().into()]);
        }
        if let Some(c) = self.count {
            args.extend([Bytes::from_static(b"COUNT"), c.to_string().into()]);
        }
        if let Some(m) = self.max_len {
            args.extend([Bytes::from_static(b"MAXLEN"), m.to_string().into()]);
        }
        args
    }
}
