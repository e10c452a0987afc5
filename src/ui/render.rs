//! Formatting of chat entries for the terminal.

use super::Style;
use crate::session::ChatEntry;
use crate::translation::Engine;

/// Formats one entry: a header line with the player, then the message.
///
/// Translated entries name the engine and source language in the header,
/// or mention the cache when no backend call was made.
pub fn format_entry(entry: &ChatEntry, engine: Engine) -> String {
    if entry.is_error {
        let name = format!("[{}]", entry.player_name);
        return format!("{}\n  {}", Style::error(name), entry.text);
    }

    let mut header = Style::value(&entry.player_name);
    if entry.was_translated {
        header.push(' ');
        header.push_str(&Style::secondary(translation_note(entry, engine)));
    }

    format!("{header}\n  {}", entry.text)
}

fn translation_note(entry: &ChatEntry, engine: Engine) -> String {
    if entry.from_cache {
        return "(from cache)".to_string();
    }

    entry.original_lang.as_deref().map_or_else(
        || format!("translated by {engine}"),
        |lang| format!("translated by {engine} (from {lang})"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ChatEntry {
        ChatEntry {
            player_name: "Ivan".to_string(),
            text: "hello".to_string(),
            was_translated: true,
            original_lang: Some("Russian".to_string()),
            is_error: false,
            from_cache: false,
        }
    }

    #[test]
    fn test_translated_entry() {
        let rendered = format_entry(&entry(), Engine::DeepL);
        assert!(rendered.contains("Ivan"));
        assert!(rendered.contains("translated by DeepL (from Russian)"));
        assert!(rendered.ends_with("\n  hello"));
    }

    #[test]
    fn test_cached_entry() {
        let entry = ChatEntry {
            from_cache: true,
            ..entry()
        };
        let rendered = format_entry(&entry, Engine::Google);
        assert!(rendered.contains("(from cache)"));
        assert!(!rendered.contains("translated by"));
    }

    #[test]
    fn test_translated_without_language() {
        let entry = ChatEntry {
            original_lang: None,
            ..entry()
        };
        let rendered = format_entry(&entry, Engine::Gemini);
        assert!(rendered.contains("translated by Gemini"));
        assert!(!rendered.contains("(from"));
    }

    #[test]
    fn test_untranslated_entry() {
        let entry = ChatEntry {
            was_translated: false,
            original_lang: None,
            text: "gg".to_string(),
            ..entry()
        };
        let rendered = format_entry(&entry, Engine::Google);
        assert!(!rendered.contains("translated by"));
        assert!(rendered.ends_with("\n  gg"));
    }

    #[test]
    fn test_error_entry() {
        let entry = ChatEntry::error("Log file not found: /tmp/console.log");
        let rendered = format_entry(&entry, Engine::Gemini);
        assert!(rendered.contains("[ERREUR]"));
        assert!(rendered.ends_with("\n  Log file not found: /tmp/console.log"));
    }
}
