//! Background worker driving one listening session.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use super::queue::{ChatEntry, EventSender};
use crate::config::SessionConfig;
use crate::log::{DEFAULT_POLL_INTERVAL, LogFollower, TailEvent, parse_chat_line};
use crate::translation::{LanguageDetector, Orchestrator, TranslationBackend};

/// How long [`Listener::stop`] waits for the worker by default.
pub const JOIN_TIMEOUT: Duration = Duration::from_secs(1);

const JOIN_POLL: Duration = Duration::from_millis(10);

/// Turns one raw log line into a chat entry, or `None` if it is not player chat.
pub fn process_line<D, B>(line: &str, orchestrator: &mut Orchestrator<D, B>) -> Option<ChatEntry>
where
    D: LanguageDetector,
    B: TranslationBackend,
{
    let event = parse_chat_line(line)?;
    let result = orchestrator.translate(&event.message);
    Some(ChatEntry::from_result(&event.player_name, &result))
}

/// Handle to a running listening session.
///
/// Dropping the handle asks the worker to stop but does not wait for it.
pub struct Listener {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Listener {
    /// Starts a session for `config` with the production detector and backend.
    pub fn start(config: SessionConfig, sender: EventSender) -> Result<Self> {
        let log_path = config.log_path.clone();
        Self::start_with(log_path, sender, DEFAULT_POLL_INTERVAL, move || {
            Orchestrator::from_config(&config)
        })
    }

    /// Starts a session whose orchestrator is built by `make_orchestrator` on the worker thread.
    pub fn start_with<D, B, F>(
        log_path: PathBuf,
        sender: EventSender,
        poll_interval: Duration,
        make_orchestrator: F,
    ) -> Result<Self>
    where
        D: LanguageDetector,
        B: TranslationBackend,
        F: FnOnce() -> Result<Orchestrator<D, B>> + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let follower =
            LogFollower::new(log_path, Arc::clone(&stop)).with_poll_interval(poll_interval);

        let handle = thread::Builder::new()
            .name("chat-listener".to_string())
            .spawn(move || run(follower, &sender, make_orchestrator))
            .context("Failed to start listening thread")?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Asks the worker to stop at its next poll.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stops the worker and waits up to `timeout` for it to exit.
    ///
    /// Returns `false` if the worker was still running when the timeout
    /// elapsed; the thread is then left to finish on its own.
    pub fn stop(mut self, timeout: Duration) -> bool {
        self.request_stop();

        let deadline = Instant::now() + timeout;
        while !self.is_finished() {
            if Instant::now() >= deadline {
                tracing::warn!(timeout_ms = timeout.as_millis() as u64, "listener did not stop in time");
                return false;
            }
            thread::sleep(JOIN_POLL);
        }

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        true
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.request_stop();
    }
}

/// Sends the stop event when the worker leaves, whatever the exit path.
struct StopGuard<'a> {
    sender: &'a EventSender,
}

impl Drop for StopGuard<'_> {
    fn drop(&mut self) {
        self.sender.send_stopped();
    }
}

fn run<D, B, F>(follower: LogFollower, sender: &EventSender, make_orchestrator: F)
where
    D: LanguageDetector,
    B: TranslationBackend,
    F: FnOnce() -> Result<Orchestrator<D, B>>,
{
    let _guard = StopGuard { sender };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        listen(follower, sender, make_orchestrator)
    }));

    let message = match outcome {
        Ok(Ok(())) => return,
        Ok(Err(e)) => format!("{e:#}"),
        Err(payload) => panic_message(payload.as_ref()),
    };

    tracing::error!(error = %message, "listening session failed");
    sender.send_entry(ChatEntry::error(format!("Unexpected error: {message}")));
}

fn listen<D, B, F>(follower: LogFollower, sender: &EventSender, make_orchestrator: F) -> Result<()>
where
    D: LanguageDetector,
    B: TranslationBackend,
    F: FnOnce() -> Result<Orchestrator<D, B>>,
{
    let mut orchestrator = make_orchestrator()?;
    let log_path = follower.path().to_path_buf();
    tracing::info!(path = %log_path.display(), engine = %orchestrator.engine(), "listening session started");

    for event in follower {
        match event.with_context(|| format!("Failed to read {}", log_path.display()))? {
            TailEvent::Line(line) => {
                if let Some(entry) = process_line(&line, &mut orchestrator) {
                    sender.send_entry(entry);
                }
            }
            TailEvent::Missing(path) => {
                tracing::warn!(path = %path.display(), "log file not found");
                sender.send_entry(ChatEntry::error(format!(
                    "Log file not found: {}",
                    path.display()
                )));
                return Ok(());
            }
        }
    }

    tracing::info!(path = %log_path.display(), "listening session stopped");
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "listening thread panicked".to_string())
}
