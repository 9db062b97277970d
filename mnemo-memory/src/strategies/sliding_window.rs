//! Fixed-size FIFO memory.

use async_trait::async_trait;
use mnemo_core::{
    MemoryStats, Message, Result,
    config::{DEFAULT_WINDOW_SIZE, SlidingWindowConfig},
    traits::MemoryStrategy,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug)]
struct WindowState {
    messages: Vec<Message>,
    window_size: usize,
}

impl WindowState {
    /// Drop the oldest messages until the window fits.
    fn trim(&mut self) -> usize {
        let excess = self.messages.len().saturating_sub(self.window_size);
        if excess > 0 {
            self.messages.drain(..excess);
        }
        excess
    }
}

/// Keeps only the most recent `window_size` messages.
///
/// Evicted messages are dropped, never summarized. Bounded context size at
/// the cost of forgetting everything older than the window.
///
/// # Examples
///
/// ```rust,no_run
/// use mnemo_core::{Message, traits::MemoryStrategy};
/// use mnemo_memory::SlidingWindowMemory;
///
/// #[tokio::main]
/// async fn main() -> mnemo_core::Result<()> {
///     let memory = SlidingWindowMemory::new(2);
///     for i in 1..=3 {
///         memory.add_message(Message::user(format!("Message {i}"))).await?;
///     }
///
///     let context = memory.get_context("").await?;
///     assert_eq!(context[0].content, "Message 2");
///     assert_eq!(context[1].content, "Message 3");
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SlidingWindowMemory {
    state: RwLock<WindowState>,
}

impl Default for SlidingWindowMemory {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl SlidingWindowMemory {
    /// Create a sliding window memory. A zero size selects the default of 10.
    pub fn new(window_size: usize) -> Self {
        Self::from_config(SlidingWindowConfig::new(window_size))
    }

    /// Create a sliding window memory from configuration.
    pub fn from_config(config: SlidingWindowConfig) -> Self {
        let config = config.normalized();
        info!(
            "Creating SlidingWindowMemory (window_size={})",
            config.window_size
        );

        Self {
            state: RwLock::new(WindowState {
                messages: Vec::with_capacity(config.window_size),
                window_size: config.window_size,
            }),
        }
    }

    /// Resize the window, dropping the oldest messages if it shrinks.
    /// A zero size selects the default of 10.
    pub async fn set_window_size(&self, window_size: usize) {
        let mut state = self.state.write().await;
        state.window_size = SlidingWindowConfig::new(window_size).normalized().window_size;
        let dropped = state.trim();
        debug!(
            "Resized sliding window to {} (dropped {})",
            state.window_size, dropped
        );
    }

    /// Current window size.
    pub async fn window_size(&self) -> usize {
        self.state.read().await.window_size
    }
}

#[async_trait]
impl MemoryStrategy for SlidingWindowMemory {
    async fn add_message(&self, message: Message) -> Result<()> {
        let mut state = self.state.write().await;
        state.messages.push(message);

        let dropped = state.trim();
        if dropped > 0 {
            debug!("Sliding window evicted {} message(s)", dropped);
        }
        Ok(())
    }

    async fn get_context(&self, _query: &str) -> Result<Vec<Message>> {
        Ok(self.state.read().await.messages.clone())
    }

    async fn clear(&self) -> Result<()> {
        self.state.write().await.messages.clear();
        info!("Cleared sliding window memory");
        Ok(())
    }

    async fn get_stats(&self) -> Result<MemoryStats> {
        Ok(MemoryStats::uncompressed(&self.state.read().await.messages))
    }

    fn name(&self) -> &'static str {
        "sliding_window"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn contents(memory: &SlidingWindowMemory) -> Vec<String> {
        memory
            .get_context("")
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.content)
            .collect()
    }

    #[tokio::test]
    async fn test_window_keeps_most_recent() {
        let memory = SlidingWindowMemory::new(2);

        for i in 1..=3 {
            memory
                .add_message(Message::user(format!("Message {i}")))
                .await
                .unwrap();
        }

        assert_eq!(contents(&memory).await, vec!["Message 2", "Message 3"]);
    }

    #[tokio::test]
    async fn test_zero_window_uses_default() {
        let memory = SlidingWindowMemory::new(0);
        assert_eq!(memory.window_size().await, 10);

        for i in 0..15 {
            memory
                .add_message(Message::user(format!("m{i}")))
                .await
                .unwrap();
        }
        assert_eq!(memory.get_context("").await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_shrinking_window_trims_immediately() {
        let memory = SlidingWindowMemory::new(5);
        for i in 0..5 {
            memory
                .add_message(Message::user(format!("m{i}")))
                .await
                .unwrap();
        }

        memory.set_window_size(2).await;
        assert_eq!(memory.window_size().await, 2);
        assert_eq!(contents(&memory).await, vec!["m3", "m4"]);

        memory.set_window_size(0).await;
        assert_eq!(memory.window_size().await, 10);
        assert_eq!(contents(&memory).await, vec!["m3", "m4"]);
    }

    #[tokio::test]
    async fn test_clear_keeps_window_size() {
        let memory = SlidingWindowMemory::new(3);
        memory.add_message(Message::user("a")).await.unwrap();
        memory.clear().await.unwrap();

        assert!(memory.get_stats().await.unwrap().is_empty());
        assert_eq!(memory.window_size().await, 3);
    }
}
