//! Queue between the listening worker and the terminal consumer.
//!
//! The worker is the only producer. The consumer polls with [`EventQueue::drain`]
//! and never blocks waiting for data.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use crate::translation::TranslationResult;

/// Maximum number of events the consumer handles per tick.
pub const DRAIN_BATCH: usize = 10;

/// How often the consumer polls the queue.
pub const POLL_TICK: Duration = Duration::from_millis(100);

/// Player name shown for error entries.
///
/// This is a fixed identity rather than UI text, so it stays French while
/// the entry notes are English.
pub const ERROR_PLAYER_NAME: &str = "ERREUR";

/// One chat line ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub player_name: String,
    pub text: String,
    pub was_translated: bool,
    /// Display name of the detected source language.
    pub original_lang: Option<String>,
    pub is_error: bool,
    pub from_cache: bool,
}

impl ChatEntry {
    /// Builds the entry for a translated chat message.
    ///
    /// Backend failures are attributed to [`ERROR_PLAYER_NAME`] instead of the player.
    pub fn from_result(player_name: &str, result: &TranslationResult) -> Self {
        let is_error = result.is_error();
        Self {
            player_name: if is_error {
                ERROR_PLAYER_NAME.to_string()
            } else {
                player_name.to_string()
            },
            text: result.final_text(),
            was_translated: result.was_translated(),
            original_lang: result.original_lang_name().map(str::to_string),
            is_error,
            from_cache: result.from_cache(),
        }
    }

    /// Builds an error entry that is not tied to a chat message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            player_name: ERROR_PLAYER_NAME.to_string(),
            text: text.into(),
            was_translated: false,
            original_lang: None,
            is_error: true,
            from_cache: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Entry(ChatEntry),
    /// The worker has left its loop. Always the last event of a session.
    Stopped,
}

/// Creates a connected sender/queue pair.
pub fn channel() -> (EventSender, EventQueue) {
    let (tx, rx) = mpsc::channel();
    (EventSender { tx }, EventQueue { rx })
}

/// Producer half, owned by the worker.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<SessionEvent>,
}

impl EventSender {
    pub fn send_entry(&self, entry: ChatEntry) {
        self.send(SessionEvent::Entry(entry));
    }

    pub fn send_stopped(&self) {
        self.send(SessionEvent::Stopped);
    }

    fn send(&self, event: SessionEvent) {
        // The consumer may already be gone during shutdown.
        if self.tx.send(event).is_err() {
            tracing::debug!("session queue closed, event dropped");
        }
    }
}

/// Consumer half, polled by the terminal loop.
#[derive(Debug)]
pub struct EventQueue {
    rx: Receiver<SessionEvent>,
}

impl EventQueue {
    /// Takes up to `max` pending events in order, without blocking.
    pub fn drain(&self, max: usize) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while events.len() < max {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        events
    }

    /// Takes every pending event in order, without blocking.
    pub fn drain_all(&self) -> Vec<SessionEvent> {
        self.rx.try_iter().collect()
    }

    /// Waits up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SessionEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}
