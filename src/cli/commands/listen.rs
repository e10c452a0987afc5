//! Listening session command handler.

use anyhow::{Context, Result};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::{
    DRAIN_BATCH, EventQueue, JOIN_TIMEOUT, Listener, POLL_TICK, SessionEvent, channel,
};
use crate::status;
use crate::translation::Engine;
use crate::ui::{Spinner, Style, format_entry};

/// Follows the console log and prints translated chat until Ctrl+C or the session ends.
pub async fn run_listen(options: ResolveOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    let config = resolve_config(&options, &config_file)?;

    if config.missing_credential() {
        status!(
            "{} no {} API key configured; translations will fail until one is set in {}",
            Style::warning("Warning:"),
            config.engine,
            manager.config_path().display()
        );
    }

    let engine = config.engine;
    status!(
        "{} {} {}",
        Style::success("Listening to"),
        config.log_path.display(),
        Style::hint("(Ctrl+C to stop)")
    );
    let spinner = Spinner::new(&format!(
        "Waiting for chat ({engine}, to {})",
        config.target_language
    ));

    let (sender, queue) = channel();
    let listener = Listener::start(config, sender)?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut ticker = tokio::time::interval(POLL_TICK);

    let session_ended = loop {
        tokio::select! {
            _ = ticker.tick() => {
                if render_pending(&queue, &spinner, engine) {
                    break true;
                }
            }
            result = &mut ctrl_c => {
                result.context("Failed to listen for Ctrl+C")?;
                break false;
            }
        }
    };

    let stopped = tokio::task::spawn_blocking(move || listener.stop(JOIN_TIMEOUT))
        .await
        .context("Failed to stop the listening thread")?;

    if !session_ended {
        render_events(queue.drain_all(), &spinner, engine);
    }
    spinner.stop();

    if !stopped {
        status!(
            "{} listening thread did not stop within {}s",
            Style::warning("Warning:"),
            JOIN_TIMEOUT.as_secs()
        );
    }
    status!("Stopped listening.");

    Ok(())
}

/// Prints up to one batch of queued entries. Returns `true` once the session has ended.
fn render_pending(queue: &EventQueue, spinner: &Spinner, engine: Engine) -> bool {
    render_events(queue.drain(DRAIN_BATCH), spinner, engine)
}

fn render_events(events: Vec<SessionEvent>, spinner: &Spinner, engine: Engine) -> bool {
    for event in events {
        match event {
            SessionEvent::Entry(entry) => {
                spinner.suspend(|| println!("{}", format_entry(&entry, engine)));
            }
            SessionEvent::Stopped => return true,
        }
    }
    false
}
