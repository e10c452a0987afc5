use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ResolveOptions;

#[derive(Parser, Debug)]
#[command(name = "cs-translator")]
#[command(about = "Live translation of Counter-Strike chat from the console log")]
#[command(version)]
pub struct Args {
    /// Path to console.log (overrides log_path and game_dir from the config file)
    #[arg(short = 'l', long = "log", value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Translation engine (google, deepl, gemini)
    #[arg(short = 'e', long)]
    pub engine: Option<String>,

    /// Target language code (ISO 639-1, e.g., fr, en, de)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Leave English messages untranslated
    #[arg(long)]
    pub exclude_english: bool,

    /// Never translate a message equal to this word (repeatable)
    #[arg(short = 'b', long = "ban", value_name = "WORD")]
    pub ban: Vec<String>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print diagnostic logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// CLI overrides for configuration resolution.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            engine: self.engine.clone(),
            to: self.to.clone(),
            log_path: self.log.clone(),
            exclude_english: self.exclude_english,
            banned_words: self.ban.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages,
    /// List translation engines and their credential status
    Engines,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_options() {
        let args = Args::try_parse_from([
            "cs-translator",
            "--log",
            "/tmp/console.log",
            "--engine",
            "deepl",
            "--to",
            "de",
            "--exclude-english",
            "--ban",
            "gg",
            "-b",
            "ez",
        ])
        .unwrap();

        assert!(args.command.is_none());
        let options = args.resolve_options();
        assert_eq!(options.log_path, Some(PathBuf::from("/tmp/console.log")));
        assert_eq!(options.engine.as_deref(), Some("deepl"));
        assert_eq!(options.to.as_deref(), Some("de"));
        assert!(options.exclude_english);
        assert_eq!(options.banned_words, vec!["gg", "ez"]);
    }

    #[test]
    fn test_subcommands_accept_global_flags() {
        let args = Args::try_parse_from(["cs-translator", "engines", "--no-color", "-q"]).unwrap();
        assert!(matches!(args.command, Some(Command::Engines)));
        assert!(args.no_color);
        assert!(args.quiet);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["cs-translator"]).unwrap();
        let options = args.resolve_options();
        assert!(options.engine.is_none());
        assert!(options.banned_words.is_empty());
        assert!(!args.verbose);
    }
}
