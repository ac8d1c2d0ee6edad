mod catalog;
mod outbox;
pub mod worker;

pub use worker::{spawn_worker, IoCommand, IoResult};
