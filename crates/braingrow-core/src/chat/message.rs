//! Chat message types.
//!
//! This module contains types for representing messages in the Ask-AI
//! conversation attached to a video.

use serde::{Deserialize, Serialize};

/// Represents the sender of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    /// Message typed by the user.
    #[serde(rename = "user")]
    User,
    /// Message produced by the AI assistant.
    #[serde(rename = "ai")]
    Assistant,
}

/// A single message in the chat transcript. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent the message.
    pub role: ChatRole,
    /// Raw message text, exactly as typed or returned.
    pub text: String,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Append-only ordered sequence of chat messages.
///
/// Messages are never reordered or mutated after they are pushed; the only
/// write operation is appending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the end of the transcript.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// The messages in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true when no messages have been appended.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
