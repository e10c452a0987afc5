//! Session-scoped translation cache.

mod memory;

pub use memory::{CacheEntry, CacheKey, TranslationCache, normalize_message};
