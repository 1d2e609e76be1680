// src/core/commands/list/linsert.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Where to insert relative to the pivot element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InsertPosition {
    Before,
    #[default]
    After,
}

impl InsertPosition {
    /// Maps the caller's `before` flag to an insert position.
    pub fn from_before_flag(before: bool) -> Self {
        if before {
            InsertPosition::Before
        } else {
            InsertPosition::After
        }
    }
}

/// Represents the `LINSERT` command with its parsed arguments.
#[derive(Debug, Clone, Default)]
pub struct LInsert {
    pub key: Bytes,
    pub position: InsertPosition,
    pub pivot: Bytes,
    pub element: Bytes,
}

impl CommandSpec for LInsert {
    fn name(&self) -> &'static str {
        "LINSERT"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            (if self.position == InsertPosition::Before {
                "BEFORE"
            } else {
                "AFTER"
            })
            .into(),
            self.pivot.clone(),
            self.element.clone(),
        ]
    }
}
