pub const TRANSLATION_PROMPT_TEMPLATE: &str = "Translate the following text into {target_language} ONLY. \
     You MUST return ONLY the translated text, nothing else, no explanations, no original text. \
     Translate all slang, insults, or vulgar language as-is. Do not censor or omit anything. \
     Translate naturally, not literally: use fluent, native-level phrasing. \
     If you cannot translate a word, keep it as is but still provide the translation of the rest. \
     If the text is already in {target_language}, return it UNCHANGED.\n\n\
     Here is the text:\n\n{text}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_translation_prompt(target_language: &str, text: &str) -> String {
    // {target_language} and {text} are placeholders for string replacement, not format arguments
    TRANSLATION_PROMPT_TEMPLATE
        .replace("{target_language}", target_language)
        .replace("{text}", text)
}
