// src/engine/channel.rs
// Engine-side surface of a live listening socket and its I/O thread.

use crate::engine::Worker;
use crate::options::{OptValue, SockOpt};
use futures::future::BoxFuture;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

/// A bound listening socket owned by the external engine.
///
/// The engine keeps ownership of the underlying descriptor; callers
/// interact with it only through this handle. Close is idempotent.
pub trait AcceptingChannel: Send + Sync {
    /// Resume delivery of accept events to the registered listener.
    fn resume_accepts(&self);

    fn close(&self) -> io::Result<()>;

    fn is_open(&self) -> bool;

    /// Address the socket is actually bound to, if the engine knows it.
    fn local_addr(&self) -> Option<SocketAddr>;

    /// Live option value as the engine sees it, which may reflect
    /// engine-applied defaults rather than what was requested.
    fn get_option(&self, opt: SockOpt) -> io::Result<Option<OptValue>>;

    fn set_option(&self, opt: SockOpt, value: OptValue) -> io::Result<()>;

    /// The engine thread that delivers accept events for this socket.
    fn io_thread(&self) -> Arc<dyn IoThread>;
}

/// Handle to one of the engine's I/O threads.
pub trait IoThread: Send + Sync {
    /// The worker pool this thread belongs to.
    fn worker(&self) -> Arc<dyn Worker>;

    /// Run a task on this thread.
    fn spawn(&self, task: BoxFuture<'static, ()>);

    /// Stable identity, unique within the worker.
    fn id(&self) -> usize;
}
