//! Message- and token-bounded buffer memory.

use async_trait::async_trait;
use mnemo_core::{
    MemoryStats, Message, Result,
    config::BufferConfig,
    traits::{MemoryStrategy, Summarizer},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::ConcatSummarizer;

/// Bounded conversation buffer with optional summarization on overflow.
///
/// On every add the buffer first enforces `max_messages`, then `max_tokens`.
/// Trimmed messages are either dropped or, with `auto_summarize`, condensed
/// into one synthetic system message placed at the front of the buffer. A
/// failing summarizer never fails the add: the buffer falls back to a plain
/// trim.
///
/// The token check walks backward from the newest message and trims
/// everything older than the message that crosses the budget; that message
/// itself is kept, so the buffer may exceed `max_tokens` by one message.
///
/// # Examples
///
/// ```rust,no_run
/// use mnemo_core::{Message, config::BufferConfig, traits::MemoryStrategy};
/// use mnemo_memory::BufferMemory;
///
/// #[tokio::main]
/// async fn main() -> mnemo_core::Result<()> {
///     let memory = BufferMemory::new(BufferConfig::default().with_max_messages(2));
///     memory.add_message(Message::user("Message 1")).await?;
///     memory.add_message(Message::user("Message 2")).await?;
///     memory.add_message(Message::user("Message 3")).await?;
///
///     assert_eq!(memory.get_context("").await?.len(), 2);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct BufferMemory {
    /// Buffered messages in chronological order.
    messages: RwLock<Vec<Message>>,

    /// Limits and summarization switch.
    config: BufferConfig,

    /// Summarizer used when `auto_summarize` is enabled.
    summarizer: Arc<dyn Summarizer>,
}

impl Default for BufferMemory {
    fn default() -> Self {
        Self::new(BufferConfig::default())
    }
}

impl BufferMemory {
    /// Create a buffer memory with the default summarizer.
    pub fn new(config: BufferConfig) -> Self {
        Self::with_summarizer(config, Arc::new(ConcatSummarizer))
    }

    /// Create a buffer memory with a custom summarizer.
    pub fn with_summarizer(config: BufferConfig, summarizer: Arc<dyn Summarizer>) -> Self {
        info!(
            "Creating BufferMemory (max_messages={}, max_tokens={}, auto_summarize={})",
            config.max_messages, config.max_tokens, config.auto_summarize
        );

        Self {
            messages: RwLock::new(Vec::new()),
            config,
            summarizer,
        }
    }

    /// Buffer configuration.
    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Copy of the buffered messages.
    pub async fn get_messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Replace the buffer contents, e.g. to warm-start a session.
    ///
    /// Limits are not applied until the next add.
    pub async fn load_messages(&self, messages: Vec<Message>) {
        let count = messages.len();
        *self.messages.write().await = messages;
        debug!("Loaded {} messages into buffer", count);
    }

    /// Remove the oldest `count` messages, replacing them with a summary when
    /// summarization is enabled and succeeds.
    async fn compact_prefix(&self, messages: &mut Vec<Message>, count: usize, reason: &str) {
        if count == 0 {
            return;
        }

        let removed: Vec<Message> = messages.drain(..count).collect();

        if !self.config.auto_summarize {
            debug!("Trimmed {} message(s) from buffer ({})", count, reason);
            return;
        }

        match self.summarizer.summarize(&removed).await {
            Ok(summary) => {
                messages.insert(0, Message::system(summary));
                debug!("Summarized {} message(s) in buffer ({})", count, reason);
            }
            Err(e) => {
                warn!(
                    "Buffer summarizer failed, trimming {} message(s) without summary ({}): {}",
                    count, reason, e
                );
            }
        }
    }
}

/// Index of the newest message whose inclusion pushes the running total,
/// counted from the newest message backward, over `max_tokens`.
fn token_overflow_index(messages: &[Message], max_tokens: usize) -> Option<usize> {
    let mut total = 0;
    for (i, message) in messages.iter().enumerate().rev() {
        total += message.token_count;
        if total > max_tokens {
            return Some(i);
        }
    }
    None
}

#[async_trait]
impl MemoryStrategy for BufferMemory {
    async fn add_message(&self, message: Message) -> Result<()> {
        let mut messages = self.messages.write().await;
        messages.push(message);

        let max_messages = self.config.max_messages;
        if max_messages > 0 && messages.len() > max_messages {
            let excess = messages.len() - max_messages;
            self.compact_prefix(&mut messages, excess, "message limit").await;
        }

        let max_tokens = self.config.max_tokens;
        if max_tokens > 0 {
            if let Some(index) = token_overflow_index(&messages, max_tokens) {
                self.compact_prefix(&mut messages, index, "token limit").await;
            }
        }

        Ok(())
    }

    async fn get_context(&self, _query: &str) -> Result<Vec<Message>> {
        Ok(self.messages.read().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        self.messages.write().await.clear();
        info!("Cleared buffer memory");
        Ok(())
    }

    async fn get_stats(&self) -> Result<MemoryStats> {
        Ok(MemoryStats::uncompressed(&self.messages.read().await))
    }

    fn name(&self) -> &'static str {
        "buffer"
    }
}
