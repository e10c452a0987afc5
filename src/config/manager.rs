use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::translation::{
    BackendOptions, DEFAULT_GEMINI_MODEL, Engine, TranslatorSettings, validate_language,
};

/// Target language used when neither the CLI nor the config file sets one.
pub const DEFAULT_TARGET_LANGUAGE: &str = "fr";

/// Location of the console log relative to the game install directory.
const CONSOLE_LOG_RELATIVE: [&str; 3] = ["game", "csgo", "console.log"];

/// Settings in the `[translator]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Engine id or display name.
    pub engine: Option<String>,
    /// Target language code (ISO 639-1).
    pub to: Option<String>,
    pub exclude_english: bool,
    pub banned_words: Vec<String>,
    /// Explicit path to `console.log`.
    pub log_path: Option<PathBuf>,
    /// Game install directory; the log is looked up underneath it.
    pub game_dir: Option<PathBuf>,
}

/// Credential settings shared by the engines that need one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiKeyConfig {
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
}

impl ApiKeyConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// The `[gemini]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    #[serde(flatten)]
    pub credential: ApiKeyConfig,
    pub model: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/cs-translator/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub translator: TranslatorConfig,
    pub deepl: ApiKeyConfig,
    pub gemini: GeminiConfig,
}

impl ConfigFile {
    /// Resolved credential for `engine`, if it needs one and one is set.
    pub fn credential(&self, engine: Engine) -> Option<String> {
        match engine {
            Engine::Google => None,
            Engine::DeepL => self.deepl.get_api_key(),
            Engine::Gemini => self.gemini.credential.get_api_key(),
        }
    }
}

/// Settings for one listening session, after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub engine: Engine,
    /// Lowercase target language code.
    pub target_language: String,
    pub exclude_english: bool,
    pub banned_words: Vec<String>,
    pub log_path: PathBuf,
    pub deepl_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl SessionConfig {
    pub fn backend_options(&self) -> BackendOptions {
        BackendOptions {
            deepl_api_key: self.deepl_api_key.clone(),
            gemini_api_key: self.gemini_api_key.clone(),
            gemini_model: self.gemini_model.clone(),
        }
    }

    pub fn translator_settings(&self) -> TranslatorSettings {
        TranslatorSettings {
            target_language: self.target_language.clone(),
            exclude_english: self.exclude_english,
            banned_words: self.banned_words.clone(),
        }
    }

    /// Returns `true` if the selected engine needs a credential that is not set.
    pub const fn missing_credential(&self) -> bool {
        match self.engine {
            Engine::Google => false,
            Engine::DeepL => self.deepl_api_key.is_none(),
            Engine::Gemini => self.gemini_api_key.is_none(),
        }
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub engine: Option<String>,
    pub to: Option<String>,
    pub log_path: Option<PathBuf>,
    pub exclude_english: bool,
    /// Added to the banned words from the config file.
    pub banned_words: Vec<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values.
///
/// # Errors
///
/// Returns an error if the engine or target language is unknown, or if no
/// log file location is configured.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<SessionConfig> {
    let translator = &config_file.translator;

    let engine = options
        .engine
        .as_deref()
        .or(translator.engine.as_deref())
        .map(str::parse::<Engine>)
        .transpose()?
        .unwrap_or_default();

    let target_language = options
        .to
        .as_deref()
        .or(translator.to.as_deref())
        .unwrap_or(DEFAULT_TARGET_LANGUAGE)
        .trim()
        .to_lowercase();
    validate_language(&target_language)?;

    let log_path = resolve_log_path(options.log_path.as_deref(), translator)?;

    let banned_words = translator
        .banned_words
        .iter()
        .chain(&options.banned_words)
        .filter(|word| !word.trim().is_empty())
        .cloned()
        .collect();

    Ok(SessionConfig {
        engine,
        target_language,
        exclude_english: options.exclude_english || translator.exclude_english,
        banned_words,
        log_path,
        deepl_api_key: config_file.credential(Engine::DeepL),
        gemini_api_key: config_file.credential(Engine::Gemini),
        gemini_model: config_file
            .gemini
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
    })
}

fn resolve_log_path(cli_path: Option<&Path>, translator: &TranslatorConfig) -> Result<PathBuf> {
    if let Some(path) = cli_path.or(translator.log_path.as_deref()) {
        return Ok(path.to_path_buf());
    }

    translator
        .game_dir
        .as_ref()
        .map(|dir| CONSOLE_LOG_RELATIVE.iter().fold(dir.clone(), |path, part| path.join(part)))
        .ok_or_else(|| {
            anyhow!(
                "Missing required configuration: 'log_path'\n\n\
                 Please provide it via:\n  \
                 - CLI option: cs-translator --log <path/to/console.log>\n  \
                 - Config file: log_path or game_dir in ~/.config/cs-translator/config.toml"
            )
        })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for `$XDG_CONFIG_HOME/cs-translator/config.toml`
    /// or `~/.config/cs-translator/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_file()?,
        })
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            Ok(ConfigFile::default())
        }
    }
}
