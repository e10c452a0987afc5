//! # cs-translator - Live Counter-Strike chat translation
//!
//! `cs-translator` follows the game's `console.log`, picks out player chat
//! lines and prints them translated into your language as they appear.
//!
//! ## Features
//!
//! - **Live tail**: only lines written after start-up are shown
//! - **Three engines**: Google (free, default), DeepL and Gemini
//! - **Session cache**: repeated messages are answered without a network call
//! - **Filters**: banned words and English messages can be left untranslated
//!
//! ## Quick Start
//!
//! ```bash
//! # Follow a log file and translate into French
//! cs-translator --log ~/cs2/game/csgo/console.log --to fr
//!
//! # Use DeepL and keep English as-is
//! cs-translator --engine deepl --exclude-english
//!
//! # Show engines and whether their API keys are set
//! cs-translator engines
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/cs-translator/config.toml`:
//!
//! ```toml
//! [translator]
//! engine = "deepl"
//! to = "fr"
//! banned_words = ["gg", "wp"]
//! game_dir = "/games/Counter-Strike Global Offensive"
//!
//! [deepl]
//! api_key_env = "DEEPL_API_KEY"
//! ```

/// Session-scoped translation cache.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and CLI override resolution.
pub mod config;

/// Console log following and chat line extraction.
pub mod log;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities.
pub mod paths;

/// Listening sessions: background worker and result queue.
pub mod session;

/// Language detection, translation engines and the orchestrator.
pub mod translation;

/// Terminal UI components (spinner, colors, chat rendering).
pub mod ui;
