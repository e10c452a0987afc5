mod extract;
mod follower;

pub use extract::{
    CHAT_TAGS, ChatEvent, extract_player_and_message, is_player_chat, parse_chat_line,
};
pub use follower::{DEFAULT_POLL_INTERVAL, LogFollower, TailEvent};
