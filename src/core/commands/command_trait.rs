// src/core/commands/command_trait.rs

//! Defines the execution-collaborator contract that command surfaces build on.

use crate::core::BerylError;
use crate::core::protocol::{CommandFrame, DecodeHint, Reply};
use async_trait::async_trait;

/// The contract between command builders and whatever actually transmits
/// frames (a live connection, a pipeline, a test spy).
///
/// Implementations submit exactly one frame per call and return the decoded
/// reply, resolving a `DecodeHint::Inherit` against their own default. Server
/// error replies surface as `BerylError::Server`; transport failures
/// propagate as-is. Blocking commands may keep the returned future pending
/// until the server responds or the command's timeout elapses.
#[async_trait]
pub trait ExecuteCommand: Send {
    async fn execute(
        &mut self,
        frame: CommandFrame,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError>;
}
