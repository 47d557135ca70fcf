// ────────────────────────────────
// src/server/acceptor.rs
// Server channel backed by the external engine's accepting primitive.
// ────────────────────────────────

use crate::engine::{AcceptListener, AcceptingChannel};
use crate::event_loop::{EngineEventLoop, EventLoop};
use crate::options::{OptValue, OptionMap, SockOpt};
use crate::server::channel::{ChannelError, ServerChannel};
use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Listening-socket channel whose socket lives in the external engine.
///
/// Until `bind` runs there is no underlying socket: option writes are
/// buffered and replayed as the initial configuration when the engine
/// creates the channel. The engine also decides which of its I/O
/// threads owns the new socket, so the adapter's execution context is
/// re-derived from the channel once bind returns and every later
/// lifecycle call sees the engine-chosen context.
pub struct ServerAcceptor {
    assigned: Arc<dyn EventLoop>,
    listener: Arc<dyn AcceptListener>,
    pending: DashMap<SockOpt, OptValue>,
    channel: OnceLock<Arc<dyn AcceptingChannel>>,
    resolved: ArcSwapOption<EngineEventLoop>,
}

impl ServerAcceptor {
    /// True iff `event_loop` is the engine-backed kind this channel can
    /// run under.
    pub fn is_compatible(event_loop: &dyn EventLoop) -> bool {
        event_loop.as_any().is::<EngineEventLoop>()
    }

    /// Build an unbound acceptor on its assigned event loop.
    ///
    /// Rejects event loops of any other kind up front, since bind
    /// reaches the engine's worker pool through the assigned loop.
    pub fn new(
        event_loop: Arc<dyn EventLoop>,
        listener: Arc<dyn AcceptListener>,
    ) -> Result<Self, ChannelError> {
        if !Self::is_compatible(event_loop.as_ref()) {
            return Err(ChannelError::IncompatibleEventLoop);
        }
        Ok(Self {
            assigned: event_loop,
            listener,
            pending: DashMap::new(),
            channel: OnceLock::new(),
            resolved: ArcSwapOption::empty(),
        })
    }

    fn snapshot_options(&self) -> OptionMap {
        self.pending.iter().map(|e| (*e.key(), *e.value())).collect()
    }
}

#[async_trait]
impl ServerChannel for ServerAcceptor {
    async fn bind(&self, addr: SocketAddr) -> Result<(), ChannelError> {
        let context = self.event_loop();
        let worker = context
            .as_any()
            .downcast_ref::<EngineEventLoop>()
            .ok_or(ChannelError::IncompatibleEventLoop)?
            .worker();

        let channel = worker
            .create_stream_server(addr, Arc::clone(&self.listener), self.snapshot_options())
            .await
            .map_err(ChannelError::Bind)?;

        if self.channel.set(Arc::clone(&channel)).is_err() {
            let _ = channel.close();
            return Err(ChannelError::AlreadyBound);
        }

        // The engine picked the owning I/O thread while creating the
        // socket; republish it as this channel's context.
        self.resolved
            .store(Some(Arc::new(EngineEventLoop::new(channel.io_thread()))));

        channel.resume_accepts();

        info!(
            "server channel listening on {}",
            channel.local_addr().unwrap_or(addr)
        );
        Ok(())
    }

    fn begin_read(&self) {
        if let Some(channel) = self.channel.get() {
            channel.resume_accepts();
        }
    }

    fn close(&self) -> Result<(), ChannelError> {
        if let Some(channel) = self.channel.get() {
            channel.close().map_err(ChannelError::Close)?;
            debug!("server channel closed");
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        // Unbound counts as open: the channel is still usable for bind.
        match self.channel.get() {
            None => true,
            Some(channel) => channel.is_open(),
        }
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        self.channel.get().and_then(|channel| channel.local_addr())
    }

    fn get_option(&self, opt: SockOpt) -> Result<Option<OptValue>, ChannelError> {
        if let Some(channel) = self.channel.get() {
            return channel.get_option(opt).map_err(ChannelError::OptionIo);
        }
        Ok(self.pending.get(&opt).map(|v| *v))
    }

    fn set_option(&self, opt: SockOpt, value: OptValue) -> Result<(), ChannelError> {
        if let Some(channel) = self.channel.get() {
            return channel.set_option(opt, value).map_err(ChannelError::OptionIo);
        }
        self.pending.insert(opt, value);
        Ok(())
    }

    fn event_loop(&self) -> Arc<dyn EventLoop> {
        match self.resolved.load_full() {
            Some(resolved) => resolved,
            None => Arc::clone(&self.assigned),
        }
    }
}
