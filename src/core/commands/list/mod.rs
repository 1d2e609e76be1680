// src/core/commands/list/mod.rs

// Internal helper module for shared list validation.
pub(crate) mod logic;

mod pushx;

// Public modules for each list command.
pub mod blpop;
pub mod brpop;
pub mod brpoplpush;
pub mod lindex;
pub mod linsert;
pub mod llen;
pub mod lmove;
pub mod lpop;
pub mod lpos;
pub mod lpush;
pub mod lrange;
pub mod lrem;
pub mod lset;
pub mod ltrim;
pub mod rpop;
pub mod rpoplpush;
pub mod rpush;

// Re-export all command structs for easy access from the parent `commands` module.
pub use self::blpop::BLPop;
pub use self::brpop::BRPop;
pub use self::brpoplpush::BRPopLPush;
pub use self::lindex::LIndex;
pub use self::linsert::{InsertPosition, LInsert};
pub use self::llen::LLen;
pub use self::lmove::{LMove, Side};
pub use self::lpop::LPop;
pub use self::lpos::LPos;
pub use self::lpush::LPush;
pub use self::lrange::LRange;
pub use self::lrem::LRem;
pub use self::lset::LSet;
pub use self::ltrim::LTrim;
pub use self::pushx::{LPushX, RPushX};
pub use self::rpop::RPop;
pub use self::rpoplpush::RPopLPush;
pub use self::rpush::RPush;

use crate::core::BerylError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::ExecuteCommand;
use crate::core::commands::helpers::wait_ok;
use crate::core::protocol::{DecodeHint, Reply};
use async_trait::async_trait;
use bytes::Bytes;

/// The list-command surface.
///
/// One method per operation: each validates its arguments, builds the
/// command frame, and delegates exactly once to the underlying
/// [`ExecuteCommand`] collaborator. Validation failures are raised before
/// delegation, so no call reaches the wire with a bad argument. The surface
/// itself holds no state; it is blanket-implemented for every executor.
///
/// Integer arguments are typed `i64` and direction flags `bool` at this
/// boundary, so the only runtime contract check left is the non-negative
/// timeout on the blocking operations.
#[async_trait]
pub trait ListCommands: ExecuteCommand {
    /// Remove and get the first element in a list, or block until one is
    /// available on any of the listed keys.
    ///
    /// The timeout is whole seconds; zero blocks forever. A negative timeout
    /// fails with `InvalidArgument` before anything is sent.
    async fn blpop(
        &mut self,
        key: Bytes,
        more_keys: Vec<Bytes>,
        timeout: i64,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError> {
        let cmd = BLPop::new(key, more_keys, timeout)?;
        self.execute(cmd.to_frame(), hint).await
    }

    /// Remove and get the last element in a list, or block until one is
    /// available on any of the listed keys.
    async fn brpop(
        &mut self,
        key: Bytes,
        more_keys: Vec<Bytes>,
        timeout: i64,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError> {
        let cmd = BRPop::new(key, more_keys, timeout)?;
        self.execute(cmd.to_frame(), hint).await
    }

    /// Pop the tail of `source` and push it onto the head of `destination`
    /// atomically, blocking until an element is available or the timeout
    /// elapses.
    async fn brpoplpush(
        &mut self,
        source: Bytes,
        destination: Bytes,
        timeout: i64,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError> {
        let cmd = BRPopLPush::new(source, destination, timeout)?;
        self.execute(cmd.to_frame(), hint).await
    }

    /// Get an element from a list by its index.
    async fn lindex(
        &mut self,
        key: Bytes,
        index: i64,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError> {
        let cmd = LIndex { key, index };
        self.execute(cmd.to_frame(), hint).await
    }

    /// Insert `value` either before or after the reference element `pivot`.
    /// The default is after.
    async fn linsert(
        &mut self,
        key: Bytes,
        pivot: Bytes,
        value: Bytes,
        before: bool,
    ) -> Result<Reply, BerylError> {
        let cmd = LInsert {
            key,
            position: InsertPosition::from_before_flag(before),
            pivot,
            element: value,
        };
        self.execute(cmd.to_frame(), DecodeHint::Inherit).await
    }

    /// Returns the length of the list stored at `key`.
    async fn llen(&mut self, key: Bytes) -> Result<Reply, BerylError> {
        let cmd = LLen { key };
        self.execute(cmd.to_frame(), DecodeHint::Inherit).await
    }

    /// Pop one end of `source` and push onto one end of `destination`
    /// atomically; each end is chosen independently by its flag.
    async fn lmove(
        &mut self,
        source: Bytes,
        destination: Bytes,
        source_is_left: bool,
        dest_is_left: bool,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError> {
        let cmd = LMove {
            source,
            destination,
            from: Side::from_left_flag(source_is_left),
            to: Side::from_left_flag(dest_is_left),
        };
        self.execute(cmd.to_frame(), hint).await
    }

    /// Removes and returns the first element of the list stored at `key`.
    async fn lpop(&mut self, key: Bytes, hint: DecodeHint) -> Result<Reply, BerylError> {
        let cmd = LPop { key };
        self.execute(cmd.to_frame(), hint).await
    }

    /// Returns the index of matching elements inside a list.
    ///
    /// With no options the first match from the head is returned, or the
    /// not-found sentinel. `count` of zero returns every match, which makes
    /// the reply an array — pick the decode hint accordingly; this layer
    /// does not infer the reply shape from the options.
    async fn lpos(
        &mut self,
        key: Bytes,
        element: Bytes,
        rank: Option<i64>,
        count: Option<i64>,
        maxlen: Option<i64>,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError> {
        let cmd = LPos {
            key,
            element,
            rank,
            count,
            max_len: maxlen,
        };
        self.execute(cmd.to_frame(), hint).await
    }

    /// Insert all the specified values at the head of the list stored at
    /// `key`, as one atomic operation.
    async fn lpush(
        &mut self,
        key: Bytes,
        value: Bytes,
        more_values: Vec<Bytes>,
    ) -> Result<Reply, BerylError> {
        let mut values = Vec::with_capacity(1 + more_values.len());
        values.push(value);
        values.extend(more_values);
        let cmd = LPush { key, values };
        self.execute(cmd.to_frame(), DecodeHint::Inherit).await
    }

    /// Inserts `value` at the head of the list, only if `key` already exists
    /// and holds a list.
    async fn lpushx(&mut self, key: Bytes, value: Bytes) -> Result<Reply, BerylError> {
        let cmd = LPushX { key, value };
        self.execute(cmd.to_frame(), DecodeHint::Inherit).await
    }

    /// Returns the specified elements of the list stored at `key`. The range
    /// is inclusive; negative indices count from the tail.
    async fn lrange(
        &mut self,
        key: Bytes,
        start: i64,
        stop: i64,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError> {
        let cmd = LRange { key, start, stop };
        self.execute(cmd.to_frame(), hint).await
    }

    /// Removes occurrences of `value` from the list. The sign of `count`
    /// selects direction and scope on the server.
    async fn lrem(&mut self, key: Bytes, count: i64, value: Bytes) -> Result<Reply, BerylError> {
        let cmd = LRem { key, count, value };
        self.execute(cmd.to_frame(), DecodeHint::Inherit).await
    }

    /// Sets the list element at `index` to `value`.
    async fn lset(&mut self, key: Bytes, index: i64, value: Bytes) -> Result<Reply, BerylError> {
        let cmd = LSet { key, index, value };
        self.execute(cmd.to_frame(), DecodeHint::Inherit).await
    }

    /// Trim the list to the given inclusive range. The simple-status reply
    /// is collapsed to a plain success signal.
    async fn ltrim(&mut self, key: Bytes, start: i64, stop: i64) -> Result<(), BerylError> {
        let cmd = LTrim { key, start, stop };
        let reply = self.execute(cmd.to_frame(), DecodeHint::Inherit).await?;
        wait_ok(reply)
    }

    /// Removes and returns the last element of the list stored at `key`.
    async fn rpop(&mut self, key: Bytes, hint: DecodeHint) -> Result<Reply, BerylError> {
        let cmd = RPop { key };
        self.execute(cmd.to_frame(), hint).await
    }

    /// Pop the tail of `source` and push it onto the head of `destination`
    /// atomically, without blocking.
    async fn rpoplpush(
        &mut self,
        source: Bytes,
        destination: Bytes,
        hint: DecodeHint,
    ) -> Result<Reply, BerylError> {
        let cmd = RPopLPush {
            source,
            destination,
        };
        self.execute(cmd.to_frame(), hint).await
    }

    /// Insert all the specified values at the tail of the list stored at
    /// `key`, as one atomic operation.
    async fn rpush(
        &mut self,
        key: Bytes,
        value: Bytes,
        more_values: Vec<Bytes>,
    ) -> Result<Reply, BerylError> {
        let mut values = Vec::with_capacity(1 + more_values.len());
        values.push(value);
        values.extend(more_values);
        let cmd = RPush { key, values };
        self.execute(cmd.to_frame(), DecodeHint::Inherit).await
    }

    /// Inserts `value` at the tail of the list, only if `key` already exists
    /// and holds a list.
    async fn rpushx(&mut self, key: Bytes, value: Bytes) -> Result<Reply, BerylError> {
        let cmd = RPushX { key, value };
        self.execute(cmd.to_frame(), DecodeHint::Inherit).await
    }
}

impl<T: ExecuteCommand> ListCommands for T {}
