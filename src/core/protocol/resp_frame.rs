// src/core/protocol/resp_frame.rs

//! Implements the RESP (REdis Serialization Protocol) framing for the client side
//! of the wire: an `Encoder` for outbound command frames and a `Decoder` for
//! inbound reply frames.

use crate::core::BerylError;
use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// The CRLF (Carriage Return, Line Feed) sequence used to terminate lines in RESP.
const CRLF: &[u8] = b"\r\n";
const CRLF_LEN: usize = 2;

// Protocol-level limits to reject corrupt or hostile reply streams early.
const MAX_FRAME_ELEMENTS: usize = 1_024 * 1_024; // Max elements in an array.
const MAX_BULK_STRING_SIZE: usize = 512 * 1024 * 1024; // 512MB max bulk string size.
const MAX_RECURSION_DEPTH: usize = 32; // Replies nest at most a few levels.

/// One outbound command invocation: the fixed command keyword followed by its
/// argument tokens in protocol order.
///
/// On the wire a command is always an array of bulk strings, so the encoder
/// only ever needs this shape. Argument order is significant: positional
/// arguments come first, then any optional tagged groups in their fixed
/// protocol order. The builders in `core::commands` uphold that ordering;
/// the encoder never reorders.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandFrame {
    pub name: &'static str,
    pub args: Vec<Bytes>,
}

impl CommandFrame {
    /// Returns the full ordered token sequence, command keyword first.
    pub fn tokens(&self) -> Vec<Bytes> {
        let mut tokens = Vec::with_capacity(1 + self.args.len());
        tokens.push(Bytes::from_static(self.name.as_bytes()));
        tokens.extend(self.args.iter().cloned());
        tokens
    }

    /// A convenience method to encode a frame into a `Vec<u8>`.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, BerylError> {
        let mut buf = BytesMut::new();
        RespFrameCodec.encode(self.clone(), &mut buf)?;
        Ok(buf.to_vec())
    }
}

/// An enum representing a single reply frame in the RESP protocol.
/// This is the low-level representation of data received from the server.
#[derive(Debug, Clone, PartialEq)]
pub enum RespFrame {
    SimpleString(String),
    Error(String),
    Integer(i64),
    BulkString(Bytes),
    Null,
    NullArray,
    Array(Vec<RespFrame>),
}

/// A `tokio_util::codec` implementation for the client side of a RESP stream:
/// encodes `CommandFrame`s and decodes `RespFrame`s.
#[derive(Debug)]
pub struct RespFrameCodec;

impl Encoder<CommandFrame> for RespFrameCodec {
    type Error = BerylError;

    /// Encodes a `CommandFrame` as a RESP array of bulk strings.
    fn encode(&mut self, item: CommandFrame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.extend_from_slice(b"*");
        dst.extend_from_slice((1 + item.args.len()).to_string().as_bytes());
        dst.extend_from_slice(CRLF);

        write_bulk(dst, item.name.as_bytes());
        for arg in &item.args {
            write_bulk(dst, arg);
        }
        Ok(())
    }
}

/// Writes one bulk string (`$<len>\r\n<data>\r\n`) into the buffer.
fn write_bulk(dst: &mut BytesMut, data: &[u8]) {
    dst.extend_from_slice(b"$");
    dst.extend_from_slice(data.len().to_string().as_bytes());
    dst.extend_from_slice(CRLF);
    dst.extend_from_slice(data);
    dst.extend_from_slice(CRLF);
}

impl Decoder for RespFrameCodec {
    type Item = RespFrame;
    type Error = BerylError;

    /// Decodes a `RespFrame` from a `BytesMut` buffer. This function is the entry point
    /// that delegates to a recursive helper to parse the frame.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let mut bytes = &src[..];
        match self.decode_recursive(&mut bytes, 0) {
            Ok(frame) => {
                let len = src.len() - bytes.len();
                src.advance(len);
                Ok(Some(frame))
            }
            // If the error is `IncompleteData`, we return `Ok(None)` to signal that
            // we need more data. For any other error, we propagate it up.
            Err(BerylError::IncompleteData) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl RespFrameCodec {
    /// A recursive helper function to decode a `RespFrame`.
    /// The `bytes` parameter is a mutable slice that is advanced as it's parsed.
    /// `depth` tracks recursion level to prevent stack overflow.
    fn decode_recursive(&self, bytes: &mut &[u8], depth: usize) -> Result<RespFrame, BerylError> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(BerylError::InvalidReply(
                "RESP recursion depth limit exceeded".to_string(),
            ));
        }

        if bytes.is_empty() {
            return Err(BerylError::IncompleteData);
        }

        match bytes[0] {
            b'+' => self.parse_simple_string(bytes),
            b'-' => self.parse_error(bytes),
            b':' => self.parse_integer(bytes),
            b'$' => self.parse_bulk_string(bytes),
            b'*' => self.parse_array(bytes, depth),
            _ => Err(BerylError::SyntaxError),
        }
    }

    /// Finds the next CRLF and returns the line, advancing past it.
    fn parse_line<'a>(&self, bytes: &mut &'a [u8]) -> Result<&'a [u8], BerylError> {
        if let Some(pos) = find_crlf(bytes) {
            let line = &bytes[..pos];
            // Advance the buffer past the line and CRLF.
            *bytes = &bytes[pos + CRLF_LEN..];
            Ok(line)
        } else {
            Err(BerylError::IncompleteData)
        }
    }

    /// Parses a Simple String (e.g., `+OK\r\n`).
    fn parse_simple_string(&self, bytes: &mut &[u8]) -> Result<RespFrame, BerylError> {
        // Advance past the '+' prefix.
        *bytes = &bytes[1..];
        let line = self.parse_line(bytes)?;
        Ok(RespFrame::SimpleString(
            String::from_utf8_lossy(line).to_string(),
        ))
    }

    /// Parses an Error (e.g., `-ERR message\r\n`).
    fn parse_error(&self, bytes: &mut &[u8]) -> Result<RespFrame, BerylError> {
        // Advance past the '-' prefix.
        *bytes = &bytes[1..];
        let line = self.parse_line(bytes)?;
        Ok(RespFrame::Error(String::from_utf8_lossy(line).to_string()))
    }

    /// Parses an Integer (e.g., `:1000\r\n`).
    fn parse_integer(&self, bytes: &mut &[u8]) -> Result<RespFrame, BerylError> {
        // Advance past the ':' prefix.
        *bytes = &bytes[1..];
        let line = self.parse_line(bytes)?;
        let s = String::from_utf8_lossy(line);
        let i = s.parse::<i64>().map_err(|_| BerylError::SyntaxError)?;
        Ok(RespFrame::Integer(i))
    }

    /// Parses a Bulk String (e.g., `$5\r\nhello\r\n`).
    fn parse_bulk_string(&self, bytes: &mut &[u8]) -> Result<RespFrame, BerylError> {
        // Advance past the '$' prefix.
        *bytes = &bytes[1..];
        let line = self.parse_line(bytes)?;
        let s = String::from_utf8_lossy(line);
        let str_len = s.parse::<isize>().map_err(|_| BerylError::SyntaxError)?;

        if str_len == -1 {
            return Ok(RespFrame::Null);
        }

        let str_len = str_len as usize;
        if str_len > MAX_BULK_STRING_SIZE {
            return Err(BerylError::SyntaxError);
        }

        if bytes.len() < str_len + CRLF_LEN {
            return Err(BerylError::IncompleteData);
        }

        if &bytes[str_len..str_len + CRLF_LEN] != CRLF {
            return Err(BerylError::SyntaxError);
        }

        let data = Bytes::copy_from_slice(&bytes[..str_len]);
        // Advance the buffer past the data and the final CRLF.
        *bytes = &bytes[str_len + CRLF_LEN..];
        Ok(RespFrame::BulkString(data))
    }

    /// Parses an Array (e.g., `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`).
    fn parse_array(&self, bytes: &mut &[u8], depth: usize) -> Result<RespFrame, BerylError> {
        // Advance past the '*' prefix.
        *bytes = &bytes[1..];
        let line = self.parse_line(bytes)?;
        let s = String::from_utf8_lossy(line);
        let arr_len = s.parse::<isize>().map_err(|_| BerylError::SyntaxError)?;

        if arr_len == -1 {
            return Ok(RespFrame::NullArray);
        }

        let arr_len = arr_len as usize;
        if arr_len > MAX_FRAME_ELEMENTS {
            return Err(BerylError::SyntaxError);
        }

        let mut frames = Vec::with_capacity(arr_len);
        for _ in 0..arr_len {
            frames.push(self.decode_recursive(bytes, depth + 1)?);
        }
        Ok(RespFrame::Array(frames))
    }
}

/// Helper function to find the next CRLF sequence in a buffer.
fn find_crlf(src: &[u8]) -> Option<usize> {
    src.windows(CRLF_LEN).position(|window| window == CRLF)
}
