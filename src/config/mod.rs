mod manager;

pub use manager::{
    ApiKeyConfig, ConfigFile, ConfigManager, DEFAULT_TARGET_LANGUAGE, GeminiConfig,
    ResolveOptions, SessionConfig, TranslatorConfig, resolve_config,
};
