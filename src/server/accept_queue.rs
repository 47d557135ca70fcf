// src/server/accept_queue.rs

use crate::engine::AcceptListener;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Hands accepted connections from the engine's I/O thread to whoever
/// consumes them on the host side, over an unbounded queue.
pub struct AcceptQueue {
    tx: mpsc::UnboundedSender<(TcpStream, SocketAddr)>,
}

impl AcceptQueue {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<(TcpStream, SocketAddr)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

impl AcceptListener for AcceptQueue {
    fn channel_accepted(&self, stream: TcpStream, peer: SocketAddr) {
        debug!(%peer, "connection accepted");
        if self.tx.send((stream, peer)).is_err() {
            warn!(%peer, "receiver gone, dropping accepted connection");
        }
    }
}
