// src/event_loop/engine_loop.rs
// Event loop backed by one of the engine's I/O threads.

use crate::engine::{IoThread, Worker};
use crate::event_loop::EventLoop;
use futures::future::BoxFuture;
use std::any::Any;
use std::sync::Arc;

/// The one [`EventLoop`] kind this integration produces.
///
/// Wraps an engine I/O thread so host-side scheduling lands on the
/// thread the engine already owns. The worker pool behind the thread is
/// reachable through [`EngineEventLoop::worker`], which is how a server
/// channel obtains its channel factory at bind time.
pub struct EngineEventLoop {
    thread: Arc<dyn IoThread>,
}

impl EngineEventLoop {
    pub fn new(thread: Arc<dyn IoThread>) -> Self {
        Self { thread }
    }

    pub fn worker(&self) -> Arc<dyn Worker> {
        self.thread.worker()
    }

    pub fn io_thread(&self) -> &Arc<dyn IoThread> {
        &self.thread
    }
}

impl EventLoop for EngineEventLoop {
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        self.thread.spawn(task);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
