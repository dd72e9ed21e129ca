//! Update parser - Parses raw transport events into structured messages

use crate::domain::entities::{Content, Message, User};

/// Parses inbound events into `Message`s the dispatcher can route.
pub struct UpdateParser;

impl UpdateParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a text message. A leading `/` makes it a command; anything else
    /// is free text (and will be treated as a domain-name query downstream).
    pub fn parse_text(
        &self,
        chat_id: impl Into<String>,
        text: impl Into<String>,
        sender: Option<User>,
    ) -> Message {
        let text = text.into();
        let chat_id = chat_id.into();

        if let Some(cmd_text) = text.strip_prefix('/') {
            let mut parts = cmd_text.split_whitespace();
            let name = parts.next().unwrap_or("").to_string();
            let args = parts.map(|s| s.to_string()).collect();
            return Message::from_command(chat_id, name, args).with_sender_opt(sender);
        }

        Message::from_text(chat_id, text).with_sender_opt(sender)
    }

    /// Parse an inline-button press.
    pub fn parse_callback(
        &self,
        chat_id: impl Into<String>,
        data: impl Into<String>,
        origin_message_id: Option<String>,
        user: User,
    ) -> Message {
        Message::new(
            chat_id,
            Content::Callback {
                data: data.into(),
                origin_message_id,
            },
        )
        .with_sender(user)
    }
}

impl Default for UpdateParser {
    fn default() -> Self {
        Self::new()
    }
}
