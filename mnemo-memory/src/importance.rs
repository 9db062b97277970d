//! Default importance scorer.

use chrono::{Duration, Utc};
use mnemo_core::{Message, MessageRole, traits::ImportanceScorer};

/// Score above which hierarchical memory promotes a message.
pub const IMPORTANCE_THRESHOLD: f32 = 0.7;

/// Heuristic importance scorer.
///
/// Starts from 0.5, adds 0.2 for system messages, 0.2 for messages over 100
/// tokens, and 0.1 for messages created in the last five minutes. An
/// explicit [`Message::importance`] replaces the heuristic entirely. The
/// result is clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicImportanceScorer {
    recency_window: Duration,
}

impl Default for HeuristicImportanceScorer {
    fn default() -> Self {
        Self {
            recency_window: Duration::minutes(5),
        }
    }
}

impl HeuristicImportanceScorer {
    /// Create a scorer with a custom recency window.
    #[must_use]
    pub fn with_recency_window(recency_window: Duration) -> Self {
        Self { recency_window }
    }
}

impl ImportanceScorer for HeuristicImportanceScorer {
    fn score(&self, message: &Message) -> f32 {
        if let Some(importance) = message.importance {
            return importance.clamp(0.0, 1.0);
        }

        let mut score = 0.5;

        if message.role == MessageRole::System {
            score += 0.2;
        }

        if message.token_count > 100 {
            score += 0.2;
        }

        if Utc::now() - message.timestamp < self.recency_window {
            score += 0.1;
        }

        f32::clamp(score, 0.0, 1.0)
    }
}
