// src/engine/mod.rs
mod channel;
mod worker;

pub use channel::{AcceptingChannel, IoThread};
pub use worker::{AcceptListener, Worker};
