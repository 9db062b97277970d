//! Memory strategy trait for conversation history.
//!
//! A memory strategy decides, turn by turn, which prior messages stay
//! verbatim in the context window, which are compacted into summaries, which
//! are evicted, and which are retrieved by relevance.

use async_trait::async_trait;

use crate::{MemoryStats, Message, Result};

/// Uniform contract implemented by every retention policy.
///
/// An orchestrator calls [`add_message`](Self::add_message) once per produced
/// message, then [`get_context`](Self::get_context) before each model
/// invocation, and [`get_stats`](Self::get_stats) for observability.
///
/// Implementations guard their state with a single reader/writer lock:
/// `add_message` and `clear` take the write side, `get_context` and
/// `get_stats` the read side. A strategy instance belongs to exactly one
/// conversation session; share nothing across sessions.
///
/// # Examples
///
/// ```rust,no_run
/// use mnemo_core::traits::MemoryStrategy;
/// use mnemo_core::{MemoryStats, Message, Result};
/// use async_trait::async_trait;
/// use std::sync::Mutex;
///
/// #[derive(Debug, Default)]
/// struct LastMessageMemory {
///     last: Mutex<Option<Message>>,
/// }
///
/// #[async_trait]
/// impl MemoryStrategy for LastMessageMemory {
///     async fn add_message(&self, message: Message) -> Result<()> {
///         *self.last.lock().unwrap() = Some(message);
///         Ok(())
///     }
///
///     async fn get_context(&self, _query: &str) -> Result<Vec<Message>> {
///         Ok(self.last.lock().unwrap().iter().cloned().collect())
///     }
///
///     async fn clear(&self) -> Result<()> {
///         *self.last.lock().unwrap() = None;
///         Ok(())
///     }
///
///     async fn get_stats(&self) -> Result<MemoryStats> {
///         let last = self.last.lock().unwrap();
///         Ok(MemoryStats::uncompressed(last.as_slice()))
///     }
/// }
/// ```
#[async_trait]
pub trait MemoryStrategy: Send + Sync + std::fmt::Debug {
    /// Add a new message to memory.
    ///
    /// Capacity limits never reject a message; they are enforced by
    /// truncation, compaction, or eviction.
    ///
    /// # Errors
    ///
    /// Returns an error when an injected summarizer or embedder fails and
    /// the strategy does not recover from it.
    async fn add_message(&self, message: Message) -> Result<()>;

    /// Add multiple messages in order, stopping at the first failure.
    async fn add_messages(&self, messages: Vec<Message>) -> Result<()> {
        for message in messages {
            self.add_message(message).await?;
        }
        Ok(())
    }

    /// Get the messages to send to the model for the current turn.
    ///
    /// The returned vector is an owned copy; later mutations of the strategy
    /// are never visible through it. Strategies that do not rank by
    /// relevance ignore `query`.
    async fn get_context(&self, query: &str) -> Result<Vec<Message>>;

    /// Reset the strategy to its empty state. Calling it twice is a no-op.
    async fn clear(&self) -> Result<()>;

    /// Recompute occupancy statistics from the current state.
    async fn get_stats(&self) -> Result<MemoryStats>;

    /// Get a human-readable name for this strategy.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
