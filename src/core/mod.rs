// src/core/mod.rs

//! The central module containing the core logic and data structures of Beryl.

pub mod commands;
pub mod errors;
pub mod protocol;

pub use commands::command_trait::ExecuteCommand;
pub use errors::BerylError;
pub use protocol::{CommandFrame, DecodeHint, Reply};
