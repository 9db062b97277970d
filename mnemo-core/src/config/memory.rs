//! Configuration for memory strategies.
//!
//! Limits are plain serializable values. Zero means "use the default" for
//! every limit except the buffer's `max_messages` and `max_tokens`, where
//! zero means unlimited. Injected collaborators (summarizers, embedders,
//! scorers) are not part of the configuration; pass them to the strategy
//! constructors or register them on the memory factory.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::{MemoryError, Result};

/// Default sliding window size.
pub const DEFAULT_WINDOW_SIZE: usize = 10;
/// Default number of verbatim messages kept by summarization memory.
pub const DEFAULT_RECENT_WINDOW_SIZE: usize = 10;
/// Default message count that triggers summarization.
pub const DEFAULT_SUMMARIZE_AFTER: usize = 20;
/// Default number of messages returned by retrieval memory.
pub const DEFAULT_TOP_K: usize = 5;
/// Default size of the hierarchical recent layer.
pub const DEFAULT_RECENT_LIMIT: usize = 10;
/// Default size of the hierarchical important layer.
pub const DEFAULT_IMPORTANT_LIMIT: usize = 20;

fn or_default(value: usize, default: usize) -> usize {
    if value == 0 { default } else { value }
}

/// Configuration for sliding window memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidingWindowConfig {
    /// Maximum number of messages kept.
    pub window_size: usize,
}

impl Default for SlidingWindowConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl SlidingWindowConfig {
    /// Create a configuration with the given window size.
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Replace zero values with defaults.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            window_size: or_default(self.window_size, DEFAULT_WINDOW_SIZE),
        }
    }
}

/// Configuration for buffer memory.
///
/// # Examples
///
/// ```rust
/// use mnemo_core::config::BufferConfig;
///
/// let config = BufferConfig::default()
///     .with_max_messages(8)
///     .with_max_tokens(500)
///     .with_auto_summarize(true);
///
/// assert_eq!(config.max_messages, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Maximum number of messages (0 = unlimited).
    pub max_messages: usize,

    /// Maximum total tokens (0 = unlimited).
    pub max_tokens: usize,

    /// Summarize trimmed messages instead of dropping them.
    pub auto_summarize: bool,
}

impl BufferConfig {
    /// Set the message limit.
    #[must_use]
    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages;
        self
    }

    /// Set the token limit.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Enable or disable summarization of trimmed messages.
    #[must_use]
    pub fn with_auto_summarize(mut self, auto_summarize: bool) -> Self {
        self.auto_summarize = auto_summarize;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.auto_summarize && self.max_messages == 0 && self.max_tokens == 0 {
            return Err(MemoryError::configuration(
                "auto_summarize requires max_messages or max_tokens to be set",
            ));
        }
        Ok(())
    }
}

/// Configuration for summarization memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizationConfig {
    /// Number of most recent messages kept verbatim after a compaction.
    pub recent_window_size: usize,

    /// Compact once more than this many verbatim messages accumulate.
    pub summarize_after: usize,
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            recent_window_size: DEFAULT_RECENT_WINDOW_SIZE,
            summarize_after: DEFAULT_SUMMARIZE_AFTER,
        }
    }
}

impl SummarizationConfig {
    /// Create a configuration with the given window and trigger sizes.
    #[must_use]
    pub fn new(recent_window_size: usize, summarize_after: usize) -> Self {
        Self {
            recent_window_size,
            summarize_after,
        }
    }

    /// Replace zero values with defaults.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            recent_window_size: or_default(self.recent_window_size, DEFAULT_RECENT_WINDOW_SIZE),
            summarize_after: or_default(self.summarize_after, DEFAULT_SUMMARIZE_AFTER),
        }
    }
}

/// Configuration for retrieval memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of most similar messages returned per query.
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

impl RetrievalConfig {
    /// Create a configuration with the given `top_k`.
    #[must_use]
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    /// Replace zero values with defaults.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            top_k: or_default(self.top_k, DEFAULT_TOP_K),
        }
    }
}

/// Configuration for hierarchical memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchicalConfig {
    /// Maximum size of the recent layer.
    pub recent_limit: usize,

    /// Maximum size of the important layer.
    pub important_limit: usize,
}

impl Default for HierarchicalConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            important_limit: DEFAULT_IMPORTANT_LIMIT,
        }
    }
}

impl HierarchicalConfig {
    /// Create a configuration with the given layer limits.
    #[must_use]
    pub fn new(recent_limit: usize, important_limit: usize) -> Self {
        Self {
            recent_limit,
            important_limit,
        }
    }

    /// Replace zero values with defaults.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            recent_limit: or_default(self.recent_limit, DEFAULT_RECENT_LIMIT),
            important_limit: or_default(self.important_limit, DEFAULT_IMPORTANT_LIMIT),
        }
    }
}

/// Strategy selection for a conversation session.
///
/// A session picks exactly one strategy for its lifetime.
///
/// # Examples
///
/// ```rust
/// use mnemo_core::config::{MemoryConfig, RetrievalConfig};
///
/// let config = MemoryConfig::from_json_str(r#"{"strategy": "retrieval", "top_k": 3}"#).unwrap();
/// assert_eq!(config, MemoryConfig::Retrieval(RetrievalConfig::new(3)));
/// assert_eq!(config.strategy_name(), "retrieval");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum MemoryConfig {
    /// Keep every message.
    Sequential,

    /// Keep the most recent messages.
    SlidingWindow(SlidingWindowConfig),

    /// Message- and token-bounded buffer.
    Buffer(BufferConfig),

    /// Rolling window plus batch summaries.
    Summarization(SummarizationConfig),

    /// Top-K similarity retrieval.
    Retrieval(RetrievalConfig),

    /// Recent, important, and archived layers.
    Hierarchical(HierarchicalConfig),
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::Buffer(BufferConfig::default().with_max_messages(10))
    }
}

impl MemoryConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!("Parsed {} memory configuration", config.strategy_name());
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Buffer(config) => config.validate(),
            Self::Sequential
            | Self::SlidingWindow(_)
            | Self::Summarization(_)
            | Self::Retrieval(_)
            | Self::Hierarchical(_) => Ok(()),
        }
    }

    /// Name of the selected strategy, as used in the `strategy` tag.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::SlidingWindow(_) => "sliding_window",
            Self::Buffer(_) => "buffer",
            Self::Summarization(_) => "summarization",
            Self::Retrieval(_) => "retrieval",
            Self::Hierarchical(_) => "hierarchical",
        }
    }
}
