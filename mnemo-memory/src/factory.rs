//! Factory for creating memory strategies from configuration.
//!
//! A conversation session picks one strategy for its lifetime. The factory
//! maps a [`MemoryConfig`] to the matching strategy, wiring in any
//! registered collaborators and falling back to the built-in defaults.

use mnemo_core::{
    Result,
    config::MemoryConfig,
    traits::{Embedder, ImportanceScorer, MemoryStrategy, Summarizer},
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    BufferMemory, ConcatSummarizer, HashEmbedder, HeuristicImportanceScorer, HierarchicalMemory,
    RetrievalMemory, SequentialMemory, SlidingWindowMemory, SummarizationMemory,
};

/// Builds memory strategies from configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use mnemo_core::config::{MemoryConfig, SummarizationConfig};
/// use mnemo_memory::{ConcatSummarizer, MemoryFactory};
/// use std::sync::Arc;
///
/// # fn example() -> mnemo_core::Result<()> {
/// let factory = MemoryFactory::new().with_summarizer(Arc::new(ConcatSummarizer));
/// let memory = factory.create_memory(&MemoryConfig::Summarization(
///     SummarizationConfig::new(5, 10),
/// ))?;
/// assert_eq!(memory.name(), "summarization");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryFactory {
    summarizer: Option<Arc<dyn Summarizer>>,
    embedder: Option<Arc<dyn Embedder>>,
    scorer: Option<Arc<dyn ImportanceScorer>>,
}

impl MemoryFactory {
    /// Create a factory that uses the built-in collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `summarizer` for buffer and summarization memory.
    #[must_use]
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Use `embedder` for retrieval memory.
    #[must_use]
    pub fn with_embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Use `scorer` for hierarchical memory.
    #[must_use]
    pub fn with_importance_scorer(mut self, scorer: Arc<dyn ImportanceScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Create the strategy selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn create_memory(&self, config: &MemoryConfig) -> Result<Arc<dyn MemoryStrategy>> {
        config.validate()?;

        let memory: Arc<dyn MemoryStrategy> = match config {
            MemoryConfig::Sequential => Arc::new(SequentialMemory::new()),
            MemoryConfig::SlidingWindow(config) => {
                Arc::new(SlidingWindowMemory::from_config(*config))
            }
            MemoryConfig::Buffer(config) => {
                Arc::new(BufferMemory::with_summarizer(*config, self.summarizer()))
            }
            MemoryConfig::Summarization(config) => {
                Arc::new(SummarizationMemory::with_summarizer(*config, self.summarizer()))
            }
            MemoryConfig::Retrieval(config) => {
                Arc::new(RetrievalMemory::with_embedder(*config, self.embedder()))
            }
            MemoryConfig::Hierarchical(config) => {
                Arc::new(HierarchicalMemory::with_scorer(*config, self.scorer()))
            }
        };

        info!("Created {} memory", memory.name());
        Ok(memory)
    }

    fn summarizer(&self) -> Arc<dyn Summarizer> {
        self.summarizer.clone().unwrap_or_else(|| {
            debug!("No summarizer registered, using ConcatSummarizer");
            Arc::new(ConcatSummarizer)
        })
    }

    fn embedder(&self) -> Arc<dyn Embedder> {
        self.embedder.clone().unwrap_or_else(|| {
            debug!("No embedder registered, using HashEmbedder");
            Arc::new(HashEmbedder::default())
        })
    }

    fn scorer(&self) -> Arc<dyn ImportanceScorer> {
        self.scorer.clone().unwrap_or_else(|| {
            debug!("No importance scorer registered, using HeuristicImportanceScorer");
            Arc::new(HeuristicImportanceScorer::default())
        })
    }
}

/// Create the strategy selected by `config` with the built-in collaborators.
///
/// # Errors
///
/// Returns a configuration error if `config` fails validation.
pub fn create_memory(config: &MemoryConfig) -> Result<Arc<dyn MemoryStrategy>> {
    MemoryFactory::new().create_memory(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mnemo_core::{
        MemoryError, Message,
        config::{
            BufferConfig, HierarchicalConfig, RetrievalConfig, SlidingWindowConfig,
            SummarizationConfig,
        },
    };
    use test_case::test_case;

    #[derive(Debug)]
    struct FixedSummarizer;

    #[async_trait]
    impl Summarizer for FixedSummarizer {
        async fn summarize(&self, _messages: &[Message]) -> Result<String> {
            Ok("fixed summary".to_string())
        }
    }

    #[test_case(MemoryConfig::Sequential, "sequential" ; "sequential")]
    #[test_case(MemoryConfig::SlidingWindow(SlidingWindowConfig::new(3)), "sliding_window" ; "sliding window")]
    #[test_case(MemoryConfig::default(), "buffer" ; "buffer")]
    #[test_case(MemoryConfig::Summarization(SummarizationConfig::new(2, 4)), "summarization" ; "summarization")]
    #[test_case(MemoryConfig::Retrieval(RetrievalConfig::new(3)), "retrieval" ; "retrieval")]
    #[test_case(MemoryConfig::Hierarchical(HierarchicalConfig::new(3, 3)), "hierarchical" ; "hierarchical")]
    fn test_create_memory_matches_strategy_name(config: MemoryConfig, expected: &str) {
        let memory = create_memory(&config).unwrap();
        assert_eq!(memory.name(), expected);
        assert_eq!(config.strategy_name(), expected);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MemoryConfig::Buffer(BufferConfig::default().with_auto_summarize(true));
        let err = create_memory(&config).unwrap_err();
        assert!(matches!(err, MemoryError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_registered_summarizer_is_used() {
        let factory = MemoryFactory::new().with_summarizer(Arc::new(FixedSummarizer));
        let config = MemoryConfig::Buffer(
            BufferConfig::default()
                .with_max_messages(1)
                .with_auto_summarize(true),
        );
        let memory = factory.create_memory(&config).unwrap();

        memory.add_message(Message::user("one")).await.unwrap();
        memory.add_message(Message::user("two")).await.unwrap();

        let context = memory.get_context("").await.unwrap();
        assert_eq!(context[0].content, "fixed summary");
        assert_eq!(context[1].content, "two");
    }
}
