// src/lib.rs

pub mod config;
pub mod connection;
pub mod core;

// Re-export
pub use crate::connection::Connection;
pub use crate::core::commands::list::ListCommands;
pub use crate::core::{BerylError, DecodeHint, Reply};
