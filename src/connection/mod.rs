// src/connection/mod.rs

//! Manages a single client TCP connection to the server: connecting, framing
//! commands onto the socket, and pairing each frame with its reply.

use crate::config::Config;
use crate::core::commands::command_trait::ExecuteCommand;
use crate::core::protocol::{CommandFrame, DecodeHint, Reply, RespFrame, RespFrameCodec};
use crate::core::BerylError;
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use std::net::SocketAddr;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_util::codec::Framed;
use tracing::{debug, trace};

/// A live connection to a Redis-compatible server.
///
/// One command is in flight at a time: `execute` writes a frame and awaits
/// exactly one reply, so request/response pairing follows submission order.
/// Blocking commands (`BLPOP` and friends) keep the call pending until the
/// server responds; with a zero timeout that can be indefinitely. There is
/// no reconnection: once the peer closes the stream or a frame fails to
/// parse, the connection should be dropped.
pub struct Connection {
    framed: Framed<TcpStream, RespFrameCodec>,
    peer: SocketAddr,
    default_hint: DecodeHint,
}

impl Connection {
    /// Establishes a TCP connection using the supplied configuration.
    ///
    /// Fails with `ConnectTimeout` if the connect does not complete within
    /// the configured window.
    pub async fn connect(config: &Config) -> Result<Self, BerylError> {
        let addr = format!("{}:{}", config.host, config.port);

        let stream = timeout(config.connect_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| BerylError::ConnectTimeout(addr.clone()))??;
        stream.set_nodelay(true)?;

        let peer = stream.peer_addr()?;
        debug!("Connected to {}", peer);

        Ok(Connection {
            framed: Framed::new(stream, RespFrameCodec),
            peer,
            default_hint: config.decode.as_hint(),
        })
    }

    /// The remote address this connection is bound to.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }
}

#[async_trait]
impl ExecuteCommand for Connection {
    async fn execute(
        &mut self,
        frame: CommandFrame,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError> {
        trace!(command = frame.name, peer = %self.peer, "sending command frame");
        self.framed.send(frame).await?;

        match self.framed.next().await {
            Some(Ok(RespFrame::Error(msg))) => Err(BerylError::Server(msg)),
            Some(Ok(reply_frame)) => Reply::decode(reply_frame, hint.resolve(self.default_hint)),
            Some(Err(e)) => Err(e),
            None => Err(BerylError::ConnectionClosed),
        }
    }
}
