//! Listening sessions: the background worker and its result queue.

mod queue;
mod worker;

pub use queue::{
    ChatEntry, DRAIN_BATCH, ERROR_PLAYER_NAME, EventQueue, EventSender, POLL_TICK, SessionEvent,
    channel,
};
pub use worker::{JOIN_TIMEOUT, Listener, process_line};
