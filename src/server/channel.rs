// src/server/channel.rs
// Lifecycle contract a server-style channel presents to the host framework.

use crate::event_loop::EventLoop;
use crate::options::{OptValue, SockOpt};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;

#[async_trait]
pub trait ServerChannel: Send + Sync {
    /// Bind to `addr` and start accepting.
    async fn bind(&self, addr: SocketAddr) -> Result<(), ChannelError>;

    /// Resume accept delivery. Safe to call before bind.
    fn begin_read(&self);

    fn close(&self) -> Result<(), ChannelError>;

    fn is_open(&self) -> bool;

    /// Bound local address, `None` while unbound.
    fn local_addr(&self) -> Option<SocketAddr>;

    fn get_option(&self, opt: SockOpt) -> Result<Option<OptValue>, ChannelError>;

    fn set_option(&self, opt: SockOpt, value: OptValue) -> Result<(), ChannelError>;

    /// The execution context this channel currently reports.
    fn event_loop(&self) -> Arc<dyn EventLoop>;
}

// Errors a server channel surfaces to its caller. Engine failures are
// carried uninterpreted.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Event loop was not produced by this integration")]
    IncompatibleEventLoop,

    #[error("Channel is already bound")]
    AlreadyBound,

    #[error("Bind failed: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Option operation failed: {0}")]
    OptionIo(#[source] std::io::Error),

    #[error("Close failed: {0}")]
    Close(#[source] std::io::Error),
}
