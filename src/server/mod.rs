// src/server/mod.rs
mod accept_queue;
mod acceptor;
mod channel;

pub use accept_queue::AcceptQueue;
pub use acceptor::ServerAcceptor;
pub use channel::{ChannelError, ServerChannel};
