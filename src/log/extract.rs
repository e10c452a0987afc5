//! Player chat line classification and parsing.
//!
//! The game client writes chat as `[TAG] <name>\u{a0}: <message>`, where the
//! separator between name and message uses a non-breaking space. System
//! messages carry the same tags but never the separator.

/// Channel tags that prefix chat lines (general, team, all, admin-team).
pub const CHAT_TAGS: &[&str] = &["[GÉNÉRAL]", "[T]", "[AT]", "[ALL]", "[CT]"];

/// Non-breaking space the client places between player name and message.
const NAME_SEPARATOR_MARK: char = '\u{a0}';

/// Full separator between the name part and the message part.
const MESSAGE_SEPARATOR: &str = "\u{a0}: ";

/// Left-to-right mark left behind by the client's text encoding.
const LEFT_TO_RIGHT_MARK: char = '\u{200e}';

/// Delimiter that starts the location/team suffix after a player name.
const TEAM_DELIMITER: char = '﹫';

/// Localized dead-player markers prepended to the name.
const DEAD_MARKERS: &[&str] = &["[MORT(E)]", "[DEAD]"];

/// A player-authored chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    pub player_name: String,
    pub message: String,
}

/// Returns `true` if the line looks like a player chat line.
///
/// Both a channel tag and the non-breaking-space marker are required.
pub fn is_player_chat(line: &str) -> bool {
    CHAT_TAGS.iter().any(|tag| line.contains(tag)) && line.contains(NAME_SEPARATOR_MARK)
}

/// Extracts the player name and message from a chat line.
///
/// Returns `None` when the line does not split into a name and a message.
pub fn extract_player_and_message(line: &str) -> Option<ChatEvent> {
    let line = line.replace(LEFT_TO_RIGHT_MARK, "");

    let (_, content) = line.split_once(']')?;
    let (name_part, message) = content.trim().split_once(MESSAGE_SEPARATOR)?;

    let mut name = name_part
        .split(TEAM_DELIMITER)
        .next()
        .unwrap_or_default()
        .to_string();
    for marker in DEAD_MARKERS {
        name = name.replace(marker, "");
    }

    Some(ChatEvent {
        player_name: name.trim().to_string(),
        message: message.trim().to_string(),
    })
}

/// Classifies and parses a raw log line in one step.
pub fn parse_chat_line(line: &str) -> Option<ChatEvent> {
    if !is_player_chat(line) {
        return None;
    }
    extract_player_and_message(line)
}
