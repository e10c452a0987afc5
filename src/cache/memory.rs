use std::collections::HashMap;

use crate::translation::Engine;

/// Normalizes a chat message for cache lookups and banned-word matching.
pub fn normalize_message(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Identifies a cached translation: normalized text plus the engine that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    normalized_message: String,
    engine: Engine,
}

impl CacheKey {
    pub fn new(message: &str, engine: Engine) -> Self {
        Self {
            normalized_message: normalize_message(message),
            engine,
        }
    }

    pub fn normalized_message(&self) -> &str {
        &self.normalized_message
    }
}

/// A successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub translated_text: String,
    pub original_lang_name: String,
}

/// In-memory cache of successful translations.
///
/// Lives as long as one listening session. Entries are never evicted.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<CacheKey, CacheEntry>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn put(&mut self, key: CacheKey, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(text: &str) -> CacheEntry {
        CacheEntry {
            translated_text: text.to_string(),
            original_lang_name: "Russian".to_string(),
        }
    }

    #[test]
    fn test_cache_miss() {
        let cache = TranslationCache::new();
        assert!(cache.get(&CacheKey::new("привет", Engine::Google)).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_hit() {
        let mut cache = TranslationCache::new();
        cache.put(CacheKey::new("привет", Engine::Google), entry("salut"));

        let hit = cache.get(&CacheKey::new("привет", Engine::Google)).unwrap();
        assert_eq!(hit.translated_text, "salut");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_is_normalized() {
        let key = CacheKey::new("  Hello There ", Engine::DeepL);
        assert_eq!(key.normalized_message(), "hello there");
        assert_eq!(key, CacheKey::new("hello there", Engine::DeepL));
    }

    #[test]
    fn test_cache_key_includes_engine() {
        let mut cache = TranslationCache::new();
        cache.put(CacheKey::new("hola", Engine::Google), entry("Google translation"));
        cache.put(CacheKey::new("hola", Engine::DeepL), entry("DeepL translation"));

        assert_eq!(
            cache
                .get(&CacheKey::new("hola", Engine::Google))
                .unwrap()
                .translated_text,
            "Google translation"
        );
        assert_eq!(
            cache
                .get(&CacheKey::new("hola", Engine::DeepL))
                .unwrap()
                .translated_text,
            "DeepL translation"
        );
        assert!(cache.get(&CacheKey::new("hola", Engine::Gemini)).is_none());
        assert_eq!(cache.len(), 2);
    }
}
