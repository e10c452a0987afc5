#![allow(clippy::unwrap_used)]
//! End-to-end listening sessions against a real file, with stubbed
//! language detection and translation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use cs_translator::session::{
    ChatEntry, ERROR_PLAYER_NAME, EventQueue, JOIN_TIMEOUT, Listener, SessionEvent, channel,
};
use cs_translator::translation::{
    Detection, Engine, LanguageDetector, Orchestrator, RateLimiter, TranslateError,
    TranslationBackend, TranslatorSettings,
};
use tempfile::TempDir;

const POLL: Duration = Duration::from_millis(20);
const WAIT: Duration = Duration::from_secs(5);

struct RussianDetector;

impl LanguageDetector for RussianDetector {
    async fn detect(&self, _text: &str) -> Result<Detection> {
        Ok(Detection {
            language: "ru".to_string(),
            confidence: 0.9,
        })
    }
}

struct ShoutingBackend;

impl TranslationBackend for ShoutingBackend {
    fn engine(&self) -> Engine {
        Engine::Google
    }

    async fn translate(&self, text: &str, _target: &str) -> Result<String, TranslateError> {
        if text == "fail" {
            return Err(TranslateError::Provider {
                engine: Engine::Google,
                message: "service unavailable".to_string(),
            });
        }
        Ok(text.to_uppercase())
    }
}

fn start(log_path: &Path) -> (Listener, EventQueue) {
    let (sender, queue) = channel();
    let listener = Listener::start_with(log_path.to_path_buf(), sender, POLL, || {
        Ok(Orchestrator::new(
            TranslatorSettings::default(),
            RussianDetector,
            ShoutingBackend,
        )?
        .with_rate_limiter(RateLimiter::new(Duration::ZERO)))
    })
    .unwrap();

    // Let the follower open the file and seek to its end.
    thread::sleep(Duration::from_millis(300));
    (listener, queue)
}

fn append(path: &Path, text: &str) {
    let mut file = OpenOptions::new().append(true).open(path).unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
}

fn next_entry(queue: &EventQueue) -> ChatEntry {
    match queue.recv_timeout(WAIT) {
        Some(SessionEvent::Entry(entry)) => entry,
        other => panic!("expected a chat entry, got {other:?}"),
    }
}

#[test]
fn test_chat_lines_are_translated_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("console.log");
    fs::write(&log, "[ALL] Old\u{a0}: before start\n").unwrap();

    let (listener, queue) = start(&log);
    append(
        &log,
        "[ALL] Ivan\u{a0}: privet\nMap: de_dust2\n[T] [MORT(E)]Olga﹫Clan\u{a0}: poka\n",
    );

    let first = next_entry(&queue);
    assert_eq!(first.player_name, "Ivan");
    assert_eq!(first.text, "PRIVET");
    assert!(first.was_translated);
    assert_eq!(first.original_lang.as_deref(), Some("Russian"));
    assert!(!first.from_cache);

    let second = next_entry(&queue);
    assert_eq!(second.player_name, "Olga");
    assert_eq!(second.text, "POKA");

    assert!(listener.stop(JOIN_TIMEOUT));
    assert_eq!(queue.recv_timeout(WAIT), Some(SessionEvent::Stopped));
}

#[test]
fn test_repeated_message_comes_from_cache() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("console.log");
    fs::write(&log, "").unwrap();

    let (listener, queue) = start(&log);
    append(&log, "[ALL] Ivan\u{a0}: privet\n[CT] Petr\u{a0}:  Privet \n");

    assert!(!next_entry(&queue).from_cache);
    let repeated = next_entry(&queue);
    assert_eq!(repeated.player_name, "Petr");
    assert_eq!(repeated.text, "PRIVET");
    assert!(repeated.from_cache);

    assert!(listener.stop(JOIN_TIMEOUT));
}

#[test]
fn test_backend_error_does_not_end_session() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("console.log");
    fs::write(&log, "").unwrap();

    let (listener, queue) = start(&log);
    append(&log, "[ALL] Ivan\u{a0}: fail\n[ALL] Ivan\u{a0}: davai\n");

    let error = next_entry(&queue);
    assert_eq!(error.player_name, ERROR_PLAYER_NAME);
    assert!(error.is_error);
    assert!(error.text.contains("service unavailable"));

    let next = next_entry(&queue);
    assert_eq!(next.player_name, "Ivan");
    assert_eq!(next.text, "DAVAI");

    assert!(!listener.is_finished());
    assert!(listener.stop(JOIN_TIMEOUT));
}

#[test]
fn test_missing_log_file_ends_session() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("missing.log");

    let (listener, queue) = start(&log);

    let entry = next_entry(&queue);
    assert_eq!(entry.player_name, ERROR_PLAYER_NAME);
    assert!(entry.is_error);
    assert_eq!(entry.text, format!("Log file not found: {}", log.display()));

    assert_eq!(queue.recv_timeout(WAIT), Some(SessionEvent::Stopped));
    assert!(listener.is_finished() || listener.stop(JOIN_TIMEOUT));
}

#[test]
fn test_stop_before_any_chat() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("console.log");
    fs::write(&log, "").unwrap();

    let (listener, queue) = start(&log);
    assert!(listener.stop(JOIN_TIMEOUT));

    assert_eq!(queue.recv_timeout(WAIT), Some(SessionEvent::Stopped));
    assert_eq!(queue.recv_timeout(Duration::from_millis(100)), None);
}
