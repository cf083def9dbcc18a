//! Transcript entries.

use chrono::{DateTime, Utc};

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message for display.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::now(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::now(ChatRole::Assistant, content)
    }

    fn now(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// `HH:MM` in UTC, as shown next to each bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn constructors_set_role() {
        assert_eq!(ChatMessage::user("hi").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("hello").role, ChatRole::Assistant);
    }

    #[test]
    fn time_label_format() {
        let mut msg = ChatMessage::user("hi");
        msg.timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 9, 7, 0).unwrap();
        assert_eq!(msg.time_label(), "09:07");
    }
}
