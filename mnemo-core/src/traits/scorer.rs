//! Importance scoring traits.

use crate::Message;

/// Scores how important a message is for long-term retention.
///
/// Scores are in `[0, 1]`. Hierarchical memory promotes messages scoring
/// above 0.7 into its important layer, and evicts the lowest-scoring
/// important message when that layer overflows. Scores are recomputed on
/// eviction, so a scorer that depends on message age may rank a message
/// differently over time.
pub trait ImportanceScorer: Send + Sync + std::fmt::Debug {
    /// Score `message` in `[0, 1]`.
    fn score(&self, message: &Message) -> f32;

    /// Get a human-readable name for this scorer.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
