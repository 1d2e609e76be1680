// src/core/commands/command_spec.rs

//! Defines the `CommandSpec` trait, which describes how a command is laid out
//! on the wire. Every list command implements it; the frame it produces is
//! what gets handed to the execution layer.

use crate::core::protocol::CommandFrame;
use bytes::Bytes;

/// A trait for describing a command's wire representation: its keyword and
/// its ordered argument tokens.
pub trait CommandSpec {
    /// The command keyword exactly as transmitted (e.g. `"LPUSH"`).
    fn name(&self) -> &'static str;

    /// Converts the command's arguments into an ordered vector of `Bytes`
    /// tokens. Positional arguments come first; any optional tagged groups
    /// follow in their fixed protocol order.
    fn to_resp_args(&self) -> Vec<Bytes>;

    /// Builds the complete outbound frame for this command.
    fn to_frame(&self) -> CommandFrame {
        CommandFrame {
            name: self.name(),
            args: self.to_resp_args(),
        }
    }
}
