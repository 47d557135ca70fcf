// src/engine/worker.rs
// Factory surface of the external engine's worker pool.

use crate::engine::AcceptingChannel;
use crate::options::OptionMap;
use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

/// Callback the engine invokes, on the channel's I/O thread, for every
/// accepted connection.
pub trait AcceptListener: Send + Sync {
    fn channel_accepted(&self, stream: TcpStream, peer: SocketAddr);
}

/// The engine's worker pool, acting as the factory for listening sockets.
#[async_trait]
pub trait Worker: Send + Sync {
    /// Create a stream-connection server bound to `addr`.
    ///
    /// `options` is the initial configuration applied while the socket
    /// is created; the engine picks the I/O thread that will own the
    /// socket and may relocate it freely before returning. Failures are
    /// reported uninterpreted.
    async fn create_stream_server(
        &self,
        addr: SocketAddr,
        listener: Arc<dyn AcceptListener>,
        options: OptionMap,
    ) -> io::Result<Arc<dyn AcceptingChannel>>;
}
