//! Headless chat widget for Sol.
//!
//! Tracks what the embedding page shows: the launcher or the open panel,
//! the transcript, the input box and the "waiting for reply" indicator.
//! Replies come from any [`sol_ai::MessageExchange`].

pub mod strings;
pub mod transcript;
pub mod widget;

pub use strings::{strings_for, WidgetStrings};
pub use transcript::{ChatMessage, ChatRole};
pub use widget::{ChatWidget, PendingTurn};
