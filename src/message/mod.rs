//! Conversation data model.
//!
//! A [`Message`] is one turn of a conversation. The `masked` flag marks a
//! message's tokens as excluded from the training loss (prompt turns are
//! masked, the trainable response is not).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speaker role for a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System instruction
    System,
    /// Human turn
    User,
    /// Model turn
    Assistant,
    /// Tool/function output
    Tool,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::Tool => write!(f, "tool"),
        }
    }
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who is speaking
    pub role: Role,
    /// Turn text
    pub content: String,
    /// Exclude this turn's tokens from the loss
    #[serde(default)]
    pub masked: bool,
}

impl Message {
    /// Create a new message.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>, masked: bool) -> Self {
        Self { role, content: content.into(), masked }
    }

    /// User turn, masked by default (prompts do not train).
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, true)
    }

    /// Assistant turn, unmasked by default (responses train).
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content, false)
    }

    /// System turn, masked by default.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content, true)
    }

    /// Set the masked flag.
    #[must_use]
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }
}
