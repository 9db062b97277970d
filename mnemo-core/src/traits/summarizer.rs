//! Summarization traits.
//!
//! Buffer and summarization memory compact older messages through a
//! [`Summarizer`]. In production this usually calls an LLM; the framework
//! ships a deterministic concatenating summarizer as a default.

use async_trait::async_trait;

use crate::{Message, Result};

/// Condenses an ordered batch of messages into a single summary text.
///
/// Strategies may call the summarizer while holding their write lock, so a
/// slow summarizer serializes all access to that strategy instance for the
/// duration of the call.
///
/// # Examples
///
/// ```rust,no_run
/// use mnemo_core::traits::Summarizer;
/// use mnemo_core::{Message, Result};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct CountingSummarizer;
///
/// #[async_trait]
/// impl Summarizer for CountingSummarizer {
///     async fn summarize(&self, messages: &[Message]) -> Result<String> {
///         Ok(format!("{} earlier messages", messages.len()))
///     }
/// }
/// ```
#[async_trait]
pub trait Summarizer: Send + Sync + std::fmt::Debug {
    /// Summarize `messages`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be produced. Buffer memory
    /// recovers by trimming without a summary; summarization memory
    /// propagates the error to its caller.
    async fn summarize(&self, messages: &[Message]) -> Result<String>;

    /// Get a human-readable name for this summarizer.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
