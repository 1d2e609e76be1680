// src/core/errors.rs

//! Defines the primary error type for the entire client.

use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing all possible failures within the client.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
#[derive(Error, Debug)]
pub enum BerylError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Incomplete data in stream")]
    IncompleteData,

    #[error("Connection closed by server")]
    ConnectionClosed,

    #[error("Timed out while connecting to '{0}'")]
    ConnectTimeout(String),

    #[error("Syntax error")]
    SyntaxError,

    #[error("Invalid reply: {0}")]
    InvalidReply(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Reply is not valid UTF-8")]
    InvalidUtf8,

    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),

    /// An error reply sent by the server, propagated verbatim.
    #[error("{0}")]
    Server(String),
}

// Manual implementation of Clone because `std::io::Error` is not cloneable.
// We wrap it in an Arc to allow for cheap, shared cloning.
impl Clone for BerylError {
    fn clone(&self) -> Self {
        match self {
            BerylError::Io(e) => BerylError::Io(Arc::clone(e)),
            BerylError::IncompleteData => BerylError::IncompleteData,
            BerylError::ConnectionClosed => BerylError::ConnectionClosed,
            BerylError::ConnectTimeout(s) => BerylError::ConnectTimeout(s.clone()),
            BerylError::SyntaxError => BerylError::SyntaxError,
            BerylError::InvalidReply(s) => BerylError::InvalidReply(s.clone()),
            BerylError::InvalidArgument(s) => BerylError::InvalidArgument(s.clone()),
            BerylError::InvalidUtf8 => BerylError::InvalidUtf8,
            BerylError::UnexpectedReply(s) => BerylError::UnexpectedReply(s.clone()),
            BerylError::Server(s) => BerylError::Server(s.clone()),
        }
    }
}

impl PartialEq for BerylError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BerylError::Io(e1), BerylError::Io(e2)) => e1.to_string() == e2.to_string(),
            (BerylError::ConnectTimeout(s1), BerylError::ConnectTimeout(s2)) => s1 == s2,
            (BerylError::InvalidReply(s1), BerylError::InvalidReply(s2)) => s1 == s2,
            (BerylError::InvalidArgument(s1), BerylError::InvalidArgument(s2)) => s1 == s2,
            (BerylError::UnexpectedReply(s1), BerylError::UnexpectedReply(s2)) => s1 == s2,
            (BerylError::Server(s1), BerylError::Server(s2)) => s1 == s2,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for BerylError {
    fn from(e: std::io::Error) -> Self {
        BerylError::Io(Arc::new(e))
    }
}

impl From<std::str::Utf8Error> for BerylError {
    fn from(_: std::str::Utf8Error) -> Self {
        BerylError::InvalidUtf8
    }
}

impl From<std::string::FromUtf8Error> for BerylError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        BerylError::InvalidUtf8
    }
}
