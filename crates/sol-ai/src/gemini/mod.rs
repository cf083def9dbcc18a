//! Google Gemini adapter.
//!
//! Implements the provider capability traits on top of the Generative
//! Language API `generateContent` endpoint.

mod api;
mod client;
mod config;

pub use api::GeminiChatSession;
pub use client::{GeminiClient, GeminiClientFactory};
pub use config::GeminiConfig;
