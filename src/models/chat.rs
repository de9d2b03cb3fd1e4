use serde::{Deserialize, Serialize};

/// Inbound WebSocket payload sent by the chat form (`ws-send`)
///
/// htmx serializes every form field plus an `HEADERS` object; only
/// `chat_message` is required and the rest is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub chat_message: String,
}

impl ChatMessage {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
