mod backend;
mod deepl;
mod detect;
mod engine;
mod error;
mod gemini;
mod google;
mod language;
mod orchestrator;
mod prompt;
mod rate_limit;
mod result;

pub use backend::{Backend, BackendOptions, TranslationBackend};
pub use deepl::DeepLClient;
pub use detect::{Detection, GoogleDetector, LanguageDetector};
pub use engine::Engine;
pub use error::TranslateError;
pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use google::GoogleClient;
pub use language::{SUPPORTED_LANGUAGES, language_name, print_languages, validate_language};
pub use orchestrator::{Orchestrator, TranslatorSettings};
pub use rate_limit::{DEFAULT_MIN_INTERVAL, RateLimiter};
pub use result::{DETECTION_FAILED_TEXT, TranslationResult};
