//! Embedding generation traits.
//!
//! Retrieval memory ranks stored messages by cosine similarity between
//! embeddings. Embeddings are computed once per message when it is added and
//! once per query.

use async_trait::async_trait;

use crate::Result;

/// Generates dense embeddings for text content.
///
/// # Examples
///
/// ```rust,no_run
/// use mnemo_core::traits::Embedder;
/// use mnemo_core::Result;
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct ConstantEmbedder {
///     dimension: usize,
/// }
///
/// #[async_trait]
/// impl Embedder for ConstantEmbedder {
///     async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
///         Ok(vec![0.1; self.dimension])
///     }
///
///     fn dimension(&self) -> usize {
///         self.dimension
///     }
/// }
/// ```
#[async_trait]
pub trait Embedder: Send + Sync + std::fmt::Debug {
    /// Generate an embedding for a single text.
    ///
    /// # Errors
    ///
    /// Returns an error if embedding generation fails due to model
    /// issues, network problems, or invalid input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Get the dimension of embeddings produced by this embedder.
    fn dimension(&self) -> usize;

    /// Get a human-readable name for this embedder.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
