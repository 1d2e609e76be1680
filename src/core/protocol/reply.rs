// src/core/protocol/reply.rs

//! Defines the decoded reply value handed to callers, and the decode hint
//! that controls how bulk payloads are interpreted.

use crate::core::BerylError;
use crate::core::protocol::RespFrame;
use bytes::Bytes;

/// Instructs the executor how to decode bulk payloads in a reply.
///
/// `Inherit` is the default-unset sentinel: it resolves to whatever decoding
/// the connection was configured with. `Raw` is an explicit override that
/// always returns payload bytes unchanged, which is distinct from "no
/// override". Modeled as its own enum so the sentinel can never collide with
/// a legitimate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeHint {
    /// Use the connection's configured default decoding.
    #[default]
    Inherit,
    /// Return bulk payloads as raw bytes.
    Raw,
    /// Decode bulk payloads as UTF-8 text. Invalid UTF-8 fails the call.
    Utf8,
}

impl DecodeHint {
    /// Resolves the `Inherit` sentinel against a connection default.
    pub fn resolve(self, default: DecodeHint) -> DecodeHint {
        match self {
            DecodeHint::Inherit => default,
            other => other,
        }
    }
}

/// `Reply` is the decoded form of a `RespFrame`.
///
/// It's what command methods return to callers: the wire frame with the
/// decode hint already applied, so callers see either `Data` (raw bytes) or
/// `Text` (UTF-8) for bulk payloads and never both. Error frames do not
/// appear here; they are surfaced as `BerylError::Server` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    SimpleString(String),
    Integer(i64),
    Data(Bytes),
    Text(String),
    Array(Vec<Reply>),
    Null,
    NullArray,
}

impl Reply {
    /// Decodes a reply frame under the given (already resolved) hint.
    ///
    /// An unresolved `Inherit` is treated as `Raw`; executors resolve the
    /// hint against their configured default before calling this.
    pub fn decode(frame: RespFrame, hint: DecodeHint) -> Result<Reply, BerylError> {
        match frame {
            RespFrame::SimpleString(s) => Ok(Reply::SimpleString(s)),
            RespFrame::Integer(i) => Ok(Reply::Integer(i)),
            RespFrame::BulkString(b) => match hint {
                DecodeHint::Utf8 => Ok(Reply::Text(String::from_utf8(b.to_vec())?)),
                _ => Ok(Reply::Data(b)),
            },
            // Recursively decode elements of an array.
            RespFrame::Array(arr) => Ok(Reply::Array(
                arr.into_iter()
                    .map(|f| Reply::decode(f, hint))
                    .collect::<Result<_, _>>()?,
            )),
            RespFrame::Null => Ok(Reply::Null),
            RespFrame::NullArray => Ok(Reply::NullArray),
            RespFrame::Error(msg) => Err(BerylError::Server(msg)),
        }
    }
}
