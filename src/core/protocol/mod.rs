// src/core/protocol/mod.rs

pub mod reply;
pub mod resp_frame;

pub use reply::{DecodeHint, Reply};
pub use resp_frame::{CommandFrame, RespFrame, RespFrameCodec};
