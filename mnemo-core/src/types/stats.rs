//! Memory occupancy statistics.

use serde::{Deserialize, Serialize};

use super::Message;

/// Read-only summary of a strategy's current occupancy.
///
/// Statistics are never stored; strategies recompute them from their
/// current structures on every `get_stats` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    /// Number of messages held by the strategy, across all layers.
    pub total_messages: usize,

    /// Estimated tokens across all held messages.
    pub total_tokens: usize,

    /// Messages exposed to the model by `get_context`.
    pub active_messages: usize,

    /// Estimated tokens exposed to the model.
    pub active_tokens: usize,

    /// `active_tokens / total_tokens`; 1.0 when nothing was compacted.
    pub compression_rate: f64,
}

impl MemoryStats {
    /// Create empty memory statistics.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_messages: 0,
            total_tokens: 0,
            active_messages: 0,
            active_tokens: 0,
            compression_rate: 1.0,
        }
    }

    /// Statistics for a strategy that exposes every message it holds.
    #[must_use]
    pub fn uncompressed(messages: &[Message]) -> Self {
        let tokens = total_tokens(messages);
        Self {
            total_messages: messages.len(),
            total_tokens: tokens,
            active_messages: messages.len(),
            active_tokens: tokens,
            compression_rate: 1.0,
        }
    }

    /// Check if the strategy holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }
}

impl Default for MemoryStats {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sum of the estimated token counts of `messages`.
#[must_use]
pub fn total_tokens<'a, I>(messages: I) -> usize
where
    I: IntoIterator<Item = &'a Message>,
{
    messages.into_iter().map(|m| m.token_count).sum()
}

/// Ratio of active to total tokens, defaulting to 1.0 for an empty memory.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compression_rate(active_tokens: usize, total_tokens: usize) -> f64 {
    if total_tokens == 0 {
        1.0
    } else {
        active_tokens as f64 / total_tokens as f64
    }
}
