// src/core/commands/mod.rs

//! This module defines the command surfaces the client exposes, organized by
//! data type, along with the traits they are built from: `CommandSpec` for a
//! command's wire layout and `ExecuteCommand` for the execution collaborator
//! that transmits frames.

// Re-export the CommandSpec trait for easy access by other modules.
pub use command_spec::CommandSpec;

pub mod command_spec;
pub mod command_trait;
pub mod helpers;
pub mod list;
