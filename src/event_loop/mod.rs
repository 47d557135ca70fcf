// src/event_loop/mod.rs
mod engine_loop;

pub use engine_loop::EngineEventLoop;

use futures::future::BoxFuture;
use std::any::Any;

/// Execution context of a channel: where its callbacks run.
///
/// Implementations other than [`EngineEventLoop`] can exist in the host
/// framework, but a server channel backed by the engine only operates
/// under the engine-backed kind; see `ServerAcceptor::is_compatible`.
pub trait EventLoop: Send + Sync + 'static {
    /// Schedule a task onto this context.
    fn spawn(&self, task: BoxFuture<'static, ()>);

    /// Concrete-kind access for compatibility checks.
    fn as_any(&self) -> &dyn Any;
}
