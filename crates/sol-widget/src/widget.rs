//! Chat widget controller.

use sol_ai::MessageExchange;
use sol_common::Language;
use tracing::debug;

use crate::strings::{strings_for, WidgetStrings};
use crate::transcript::{ChatMessage, ChatRole};

/// A user turn that has been shown and is waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub language: Language,
    pub text: String,
}

/// State behind the chat launcher and panel.
pub struct ChatWidget {
    language: Language,
    is_open: bool,
    messages: Vec<ChatMessage>,
    input_text: String,
    is_waiting: bool,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl ChatWidget {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            is_open: false,
            messages: Vec::new(),
            input_text: String::new(),
            is_waiting: false,
        }
    }

    // -- Open / close --

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    // -- Language --

    /// Switch display language. The next exchange carries the new language,
    /// which makes the session cache build a matching session.
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            debug!(from = %self.language, to = %language, "chat widget language changed");
            self.language = language;
        }
    }

    pub fn strings(&self) -> &'static WidgetStrings {
        strings_for(self.language)
    }

    // -- Input --

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    // -- Exchange --

    /// Move the input into the transcript and raise the waiting indicator.
    ///
    /// Returns `None` (leaving state untouched) when the panel is closed, a
    /// reply is still pending, or the input is blank.
    pub fn begin_submit(&mut self) -> Option<PendingTurn> {
        if !self.is_open || self.is_waiting {
            return None;
        }
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.input_text.clear();
        self.messages.push(ChatMessage::user(text.clone()));
        self.is_waiting = true;
        Some(PendingTurn {
            language: self.language,
            text,
        })
    }

    /// Append the reply for the pending turn and clear the indicator.
    ///
    /// Ignored (returns `false`) when no turn is pending.
    pub fn finish_submit(&mut self, reply: impl Into<String>) -> bool {
        if !self.is_waiting {
            debug!("reply arrived with no pending turn, dropped");
            return false;
        }
        self.messages.push(ChatMessage::assistant(reply));
        self.is_waiting = false;
        true
    }

    /// Full round trip: show the user turn, await the reply, show it.
    /// Returns `false` if nothing was sent.
    pub async fn submit(&mut self, exchange: &dyn MessageExchange) -> bool {
        let Some(turn) = self.begin_submit() else {
            return false;
        };
        let reply = exchange.send_message(turn.language, &turn.text).await;
        self.finish_submit(reply);
        true
    }

    // -- Getters --

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_waiting(&self) -> bool {
        self.is_waiting
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Assistant)
    }
}
