// src/core/commands/list/lmove.rs

//! Implements the `LMOVE` command.

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Defines the direction for list operations (left or right).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Maps a "this end is the head" flag to a side.
    pub fn from_left_flag(is_left: bool) -> Self {
        if is_left { Side::Left } else { Side::Right }
    }
}

/// Represents the `LMOVE` command: an atomic server-side pop from one end of
/// `source` and push onto one end of `destination`, each end chosen
/// independently.
#[derive(Debug, Clone, Default)]
pub struct LMove {
    pub source: Bytes,
    pub destination: Bytes,
    pub from: Side,
    pub to: Side,
}

impl CommandSpec for LMove {
    fn name(&self) -> &'static str {
        "LMOVE"
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.source.clone(),
            self.destination.clone(),
            (if self.from == Side::Left {
                "LEFT"
            } else {
                "RIGHT"
            })
            .into(),
            (if self.to == Side::Left {
                "LEFT"
            } else {
                "RIGHT"
            })
            .into(),
        ]
    }
}
