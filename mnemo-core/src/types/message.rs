//! Conversation messages.
//!
//! A [`Message`] is the atomic unit of conversational state handled by every
//! memory strategy. Token counts are a heuristic estimate fixed at
//! construction time; they make no promise of matching a real tokenizer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Role of the author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// End user input.
    User,
    /// Model output.
    Assistant,
    /// Instructions and synthetic summaries.
    System,
}

impl MessageRole {
    /// Lowercase wire name of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversation message.
///
/// # Examples
///
/// ```rust
/// use mnemo_core::types::{Message, MessageRole};
///
/// let msg = Message::user("Remember that my order number is 4471")
///     .with_importance(0.9);
///
/// assert_eq!(msg.role, MessageRole::User);
/// assert_eq!(msg.token_count, msg.content.len() / 4);
/// assert_eq!(msg.importance, Some(0.9));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier, ordered by creation time within a process.
    pub id: String,

    /// Author role.
    pub role: MessageRole,

    /// Message text.
    pub content: String,

    /// Creation instant.
    pub timestamp: DateTime<Utc>,

    /// Open-ended metadata attached by the caller.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,

    /// Explicit importance override in `[0, 1]`.
    ///
    /// Hierarchical memory promotes a message with an importance above 0.7
    /// without consulting its scorer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f32>,

    /// Approximate token count (`content.len() / 4`).
    pub token_count: usize,
}

impl Message {
    /// Create a new message with a fresh ID and the current timestamp.
    pub fn new<S: Into<String>>(role: MessageRole, content: S) -> Self {
        let content = content.into();
        let token_count = estimate_tokens(&content);

        Self {
            id: generate_id(),
            role,
            content,
            timestamp: Utc::now(),
            metadata: HashMap::new(),
            importance: None,
            token_count,
        }
    }

    /// Create a user message.
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Create a system message.
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Set an explicit importance, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_importance(mut self, importance: f32) -> Self {
        self.importance = Some(importance.clamp(0.0, 1.0));
        self
    }

    /// Attach a metadata entry.
    #[must_use]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Override the creation timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Estimate the token count of a text.
///
/// Roughly four bytes per token. Use a real tokenizer upstream when exact
/// counts matter.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / 4
}

/// Generate a unique message ID.
///
/// IDs are time-ordered UUIDv7 strings; IDs created by the same process sort
/// in creation order.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
