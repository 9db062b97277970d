//! Three-layer memory: recent, important, archived.

use async_trait::async_trait;
use mnemo_core::{
    MemoryStats, Message, Result,
    config::HierarchicalConfig,
    traits::{ImportanceScorer, MemoryStrategy},
    types::{compression_rate, total_tokens},
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::importance::{HeuristicImportanceScorer, IMPORTANCE_THRESHOLD};

#[derive(Debug, Default)]
struct HierarchicalState {
    /// Newest messages, FIFO bounded by `recent_limit`.
    recent: Vec<Message>,
    /// Promoted messages, bounded by `important_limit`.
    important: Vec<Message>,
    /// Evicted messages. Kept for inspection, never returned as context.
    archived: Vec<Message>,
}

impl HierarchicalState {
    fn important_ids(&self) -> HashSet<&str> {
        self.important.iter().map(|m| m.id.as_str()).collect()
    }
}

/// Layers conversation history by recency and importance.
///
/// Every message enters the recent layer. Messages scoring above 0.7 are
/// also promoted into the important layer, where they outlive the recent
/// window. When the recent layer overflows its oldest message is archived,
/// unless it was promoted. When the important layer overflows its
/// lowest-scoring message is archived.
///
/// A promoted message can sit in both the recent and important layers at
/// once. Context lists it only once, but [`get_stats`](MemoryStrategy::get_stats)
/// counts it in both layers.
///
/// # Examples
///
/// ```rust,no_run
/// use mnemo_core::{Message, config::HierarchicalConfig, traits::MemoryStrategy};
/// use mnemo_memory::HierarchicalMemory;
///
/// #[tokio::main]
/// async fn main() -> mnemo_core::Result<()> {
///     let memory = HierarchicalMemory::new(HierarchicalConfig::new(2, 5));
///     memory
///         .add_message(Message::user("My name is Ada").with_importance(0.9))
///         .await?;
///     for i in 0..3 {
///         memory.add_message(Message::user(format!("chatter {i}"))).await?;
///     }
///
///     let context = memory.get_context("").await?;
///     assert_eq!(context[0].content, "My name is Ada");
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct HierarchicalMemory {
    state: RwLock<HierarchicalState>,
    config: HierarchicalConfig,
    scorer: Arc<dyn ImportanceScorer>,
}

impl Default for HierarchicalMemory {
    fn default() -> Self {
        Self::new(HierarchicalConfig::default())
    }
}

impl HierarchicalMemory {
    /// Create a hierarchical memory with the heuristic importance scorer.
    pub fn new(config: HierarchicalConfig) -> Self {
        Self::with_scorer(config, Arc::new(HeuristicImportanceScorer::default()))
    }

    /// Create a hierarchical memory with a custom importance scorer.
    pub fn with_scorer(config: HierarchicalConfig, scorer: Arc<dyn ImportanceScorer>) -> Self {
        let config = config.normalized();
        info!(
            "Creating HierarchicalMemory (recent_limit={}, important_limit={}, scorer={})",
            config.recent_limit,
            config.important_limit,
            scorer.name()
        );

        Self {
            state: RwLock::new(HierarchicalState::default()),
            config,
            scorer,
        }
    }

    /// Normalized configuration in effect.
    pub fn config(&self) -> &HierarchicalConfig {
        &self.config
    }

    /// Copy of the archived messages, in eviction order.
    pub async fn archived_messages(&self) -> Vec<Message> {
        self.state.read().await.archived.clone()
    }

    fn is_important(&self, message: &Message) -> bool {
        if message
            .importance
            .is_some_and(|importance| importance > IMPORTANCE_THRESHOLD)
        {
            return true;
        }
        self.scorer.score(message) > IMPORTANCE_THRESHOLD
    }

    /// Index of the lowest-scoring important message; the first wins on ties.
    fn least_important(&self, important: &[Message]) -> Option<usize> {
        let mut lowest: Option<(usize, f32)> = None;
        for (i, message) in important.iter().enumerate() {
            let score = self.scorer.score(message);
            if lowest.is_none_or(|(_, min)| score < min) {
                lowest = Some((i, score));
            }
        }
        lowest.map(|(i, _)| i)
    }
}

#[async_trait]
impl MemoryStrategy for HierarchicalMemory {
    async fn add_message(&self, message: Message) -> Result<()> {
        let mut state = self.state.write().await;

        if self.is_important(&message) {
            debug!("Promoted message {} to important layer", message.id);
            state.important.push(message.clone());
        }
        state.recent.push(message);

        if state.recent.len() > self.config.recent_limit {
            let oldest = state.recent.remove(0);
            if state.important.iter().any(|m| m.id == oldest.id) {
                debug!("Dropped promoted message {} from recent layer", oldest.id);
            } else {
                debug!("Archived message {} from recent layer", oldest.id);
                state.archived.push(oldest);
            }
        }

        if state.important.len() > self.config.important_limit {
            if let Some(index) = self.least_important(&state.important) {
                let evicted = state.important.remove(index);
                debug!("Archived message {} from important layer", evicted.id);
                state.archived.push(evicted);
            }
        }

        Ok(())
    }

    async fn get_context(&self, _query: &str) -> Result<Vec<Message>> {
        let state = self.state.read().await;
        let important_ids = state.important_ids();

        let mut context = Vec::with_capacity(state.important.len() + state.recent.len());
        context.extend(state.important.iter().cloned());
        context.extend(
            state
                .recent
                .iter()
                .filter(|m| !important_ids.contains(m.id.as_str()))
                .cloned(),
        );

        Ok(context)
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.recent.clear();
        state.important.clear();
        state.archived.clear();
        info!("Cleared hierarchical memory");
        Ok(())
    }

    async fn get_stats(&self) -> Result<MemoryStats> {
        let state = self.state.read().await;

        let recent_tokens = total_tokens(&state.recent);
        let important_tokens = total_tokens(&state.important);
        let archived_tokens = total_tokens(&state.archived);

        let total = recent_tokens + important_tokens + archived_tokens;
        let active = recent_tokens + important_tokens;

        Ok(MemoryStats {
            total_messages: state.recent.len() + state.important.len() + state.archived.len(),
            total_tokens: total,
            active_messages: state.recent.len() + state.important.len(),
            active_tokens: active,
            compression_rate: compression_rate(active, total),
        })
    }

    fn name(&self) -> &'static str {
        "hierarchical"
    }
}
