//! Default summarizer.

use async_trait::async_trait;
use mnemo_core::{Message, Result, traits::Summarizer};

/// Maximum characters of each message kept in a concatenated summary.
pub const MAX_SUMMARY_EXCERPT_CHARS: usize = 200;

/// Deterministic summarizer that concatenates truncated messages.
///
/// Produces `Conversation with N exchanges covering: role: text; role: text`
/// with each message cut to 200 characters. It makes no external calls and
/// is meant to be replaced by an LLM-backed summarizer in production.
///
/// # Examples
///
/// ```rust
/// use mnemo_core::{Message, traits::Summarizer};
/// use mnemo_memory::ConcatSummarizer;
///
/// #[tokio::main]
/// async fn main() -> mnemo_core::Result<()> {
///     let summary = ConcatSummarizer
///         .summarize(&[Message::user("Hi"), Message::assistant("Hello")])
///         .await?;
///     assert_eq!(summary, "Conversation with 2 exchanges covering: user: Hi; assistant: Hello");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcatSummarizer;

impl ConcatSummarizer {
    fn excerpt(content: &str) -> String {
        match content.char_indices().nth(MAX_SUMMARY_EXCERPT_CHARS) {
            Some((cut, _)) => format!("{}...", &content[..cut]),
            None => content.to_string(),
        }
    }
}

#[async_trait]
impl Summarizer for ConcatSummarizer {
    async fn summarize(&self, messages: &[Message]) -> Result<String> {
        if messages.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<String> = messages
            .iter()
            .map(|msg| format!("{}: {}", msg.role, Self::excerpt(&msg.content)))
            .collect();

        Ok(format!(
            "Conversation with {} exchanges covering: {}",
            messages.len(),
            parts.join("; ")
        ))
    }
}
