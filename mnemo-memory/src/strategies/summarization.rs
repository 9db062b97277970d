//! Rolling window memory with batch summarization.

use async_trait::async_trait;
use chrono::Utc;
use mnemo_core::{
    MemoryError, MemoryStats, Message, MessageRole, Result,
    config::SummarizationConfig,
    estimate_tokens,
    traits::{MemoryStrategy, Summarizer},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::ConcatSummarizer;

/// Assumed tokens per message folded into a summary, for compression stats.
const ESTIMATED_TOKENS_PER_SUMMARIZED_MESSAGE: usize = 100;

#[derive(Debug, Default)]
struct SummarizationState {
    /// Messages kept verbatim.
    recent: Vec<Message>,
    /// One summary per compaction, oldest first.
    summaries: Vec<String>,
}

/// Keeps recent messages verbatim and condenses older ones into summaries.
///
/// Once more than `summarize_after` verbatim messages accumulate, everything
/// but the newest `recent_window_size` is summarized in one batch. Summaries
/// accumulate; they are never merged or re-summarized. Unlike
/// [`BufferMemory`](crate::BufferMemory), a failing summarizer fails the add.
#[derive(Debug)]
pub struct SummarizationMemory {
    state: RwLock<SummarizationState>,
    config: SummarizationConfig,
    summarizer: Arc<dyn Summarizer>,
}

impl Default for SummarizationMemory {
    fn default() -> Self {
        Self::new(SummarizationConfig::default())
    }
}

impl SummarizationMemory {
    /// Create a summarization memory with the default summarizer.
    pub fn new(config: SummarizationConfig) -> Self {
        Self::with_summarizer(config, Arc::new(ConcatSummarizer))
    }

    /// Create a summarization memory with a custom summarizer.
    pub fn with_summarizer(config: SummarizationConfig, summarizer: Arc<dyn Summarizer>) -> Self {
        let config = config.normalized();
        info!(
            "Creating SummarizationMemory (recent_window_size={}, summarize_after={})",
            config.recent_window_size, config.summarize_after
        );

        Self {
            state: RwLock::new(SummarizationState::default()),
            config,
            summarizer,
        }
    }

    /// Normalized configuration in effect.
    pub fn config(&self) -> &SummarizationConfig {
        &self.config
    }

    /// Copy of the stored summaries, oldest first.
    pub async fn summaries(&self) -> Vec<String> {
        self.state.read().await.summaries.clone()
    }

    /// Summarize all but the newest `recent_window_size` messages.
    async fn summarize_overflow(&self, state: &mut SummarizationState) -> Result<()> {
        let count = state
            .recent
            .len()
            .saturating_sub(self.config.recent_window_size);
        if count == 0 {
            return Ok(());
        }

        let summary = self
            .summarizer
            .summarize(&state.recent[..count])
            .await
            .map_err(|e| match e {
                MemoryError::Summarization { .. } => e,
                other => MemoryError::summarization(other.to_string()),
            })?;

        state.summaries.push(summary);
        state.recent.drain(..count);
        debug!(
            "Summarized {} message(s); {} summaries stored",
            count,
            state.summaries.len()
        );
        Ok(())
    }
}

#[async_trait]
impl MemoryStrategy for SummarizationMemory {
    /// Append a message and summarize if the verbatim window overflowed.
    ///
    /// On summarizer failure the message stays appended and the error is
    /// returned; the next add retries the summarization.
    async fn add_message(&self, message: Message) -> Result<()> {
        let mut state = self.state.write().await;
        state.recent.push(message);

        if state.recent.len() > self.config.summarize_after {
            self.summarize_overflow(&mut state).await?;
        }
        Ok(())
    }

    async fn get_context(&self, _query: &str) -> Result<Vec<Message>> {
        let state = self.state.read().await;

        let timestamp = state
            .recent
            .first()
            .map_or_else(Utc::now, |m| m.timestamp);

        let mut context = Vec::with_capacity(state.summaries.len() + state.recent.len());
        for (i, summary) in state.summaries.iter().enumerate() {
            context.push(Message {
                id: format!("summary_{i}"),
                role: MessageRole::System,
                content: format!("[Summary of earlier conversation]: {summary}"),
                timestamp,
                metadata: HashMap::new(),
                importance: None,
                token_count: estimate_tokens(summary),
            });
        }
        context.extend(state.recent.iter().cloned());

        Ok(context)
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.recent.clear();
        state.summaries.clear();
        info!("Cleared summarization memory");
        Ok(())
    }

    /// The compression rate is an estimate: each summary is assumed to stand
    /// for `summarize_after` messages of about 100 tokens each.
    #[allow(clippy::cast_precision_loss)]
    async fn get_stats(&self) -> Result<MemoryStats> {
        let state = self.state.read().await;

        let recent_tokens: usize = state.recent.iter().map(|m| m.token_count).sum();
        let summary_tokens: usize = state.summaries.iter().map(|s| estimate_tokens(s)).sum();
        let total_tokens = recent_tokens + summary_tokens;

        let estimated_original_tokens = state.summaries.len()
            * self.config.summarize_after
            * ESTIMATED_TOKENS_PER_SUMMARIZED_MESSAGE
            + recent_tokens;
        let compression_rate = if estimated_original_tokens > 0 {
            total_tokens as f64 / estimated_original_tokens as f64
        } else {
            1.0
        };

        Ok(MemoryStats {
            total_messages: state.summaries.len() + state.recent.len(),
            total_tokens,
            active_messages: state.recent.len(),
            active_tokens: total_tokens,
            compression_rate,
        })
    }

    fn name(&self) -> &'static str {
        "summarization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[derive(Debug)]
    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _messages: &[Message]) -> Result<String> {
            Err(MemoryError::external(anyhow::anyhow!("model unavailable")))
        }
    }

    #[tokio::test]
    async fn test_summarization_trigger() {
        let memory = SummarizationMemory::new(SummarizationConfig::new(2, 3));

        for _ in 0..4 {
            memory
                .add_message(Message::user("Message content"))
                .await
                .unwrap();
        }

        let context = memory.get_context("").await.unwrap();
        assert!(context.len() >= 2);
        assert_eq!(context[0].role, MessageRole::System);
        assert_eq!(context[0].id, "summary_0");
        assert!(
            context[0]
                .content
                .starts_with("[Summary of earlier conversation]: Conversation with 2 exchanges")
        );
        assert_eq!(context.len(), 3);
    }

    #[tokio::test]
    async fn test_summary_borrows_oldest_recent_timestamp() {
        let memory = SummarizationMemory::new(SummarizationConfig::new(1, 1));
        memory.add_message(Message::user("first")).await.unwrap();
        memory.add_message(Message::user("second")).await.unwrap();

        let context = memory.get_context("").await.unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context[0].timestamp, context[1].timestamp);
        assert_eq!(context[1].content, "second");
    }

    #[tokio::test]
    async fn test_summaries_accumulate() {
        let memory = SummarizationMemory::new(SummarizationConfig::new(2, 3));

        for i in 0..8 {
            memory
                .add_message(Message::user(format!("m{i}")))
                .await
                .unwrap();
        }

        // compactions happen on adds 4, 6 and 8
        let summaries = memory.summaries().await;
        assert_eq!(summaries.len(), 3);

        let context = memory.get_context("").await.unwrap();
        let tail: Vec<&str> = context[3..].iter().map(|m| m.content.as_str()).collect();
        assert_eq!(tail, vec!["m6", "m7"]);
    }

    #[tokio::test]
    async fn test_failure_propagates_with_prefix() {
        let memory = SummarizationMemory::with_summarizer(
            SummarizationConfig::new(1, 1),
            Arc::new(FailingSummarizer),
        );

        memory.add_message(Message::user("a")).await.unwrap();
        let err = memory.add_message(Message::user("b")).await.unwrap_err();

        assert!(matches!(err, MemoryError::Summarization { .. }));
        assert!(err.to_string().starts_with("summarization failed:"));
        assert!(err.to_string().contains("model unavailable"));

        // the message stays; nothing was summarized
        assert_eq!(memory.get_context("").await.unwrap().len(), 2);
        assert!(memory.summaries().await.is_empty());
    }

    #[tokio::test]
    async fn test_stats_estimate_compression() {
        let memory = SummarizationMemory::new(SummarizationConfig::new(2, 3));

        for _ in 0..4 {
            memory
                .add_message(Message::user("x".repeat(40)))
                .await
                .unwrap();
        }

        let stats = memory.get_stats().await.unwrap();
        assert_eq!(stats.total_messages, 3);
        assert_eq!(stats.active_messages, 2);
        assert_eq!(stats.active_tokens, stats.total_tokens);
        assert!(stats.compression_rate < 1.0);

        let summary_tokens = estimate_tokens(&memory.summaries().await[0]);
        let expected = (20 + summary_tokens) as f64 / (3 * 100 + 20) as f64;
        assert_relative_eq!(stats.compression_rate, expected);
    }

    #[tokio::test]
    async fn test_empty_stats() {
        let memory = SummarizationMemory::default();
        let stats = memory.get_stats().await.unwrap();
        assert!(stats.is_empty());
        assert_relative_eq!(stats.compression_rate, 1.0);
    }
}
