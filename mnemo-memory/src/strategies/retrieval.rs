//! Embedding similarity retrieval memory.

use async_trait::async_trait;
use mnemo_core::{
    MemoryError, MemoryStats, Message, Result,
    config::RetrievalConfig,
    traits::{Embedder, MemoryStrategy},
    types::{compression_rate, total_tokens},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::embedding::{HashEmbedder, cosine_similarity};

#[derive(Debug, Default)]
struct RetrievalState {
    /// Full history in insertion order.
    messages: Vec<Message>,
    /// Embedding per message ID, computed once at insertion.
    embeddings: HashMap<String, Vec<f32>>,
    top_k: usize,
}

/// Retrieves the `top_k` stored messages most similar to the query.
///
/// Every message is embedded once when added. A query is embedded, scored
/// against every stored message by cosine similarity, and the best matches
/// are returned in descending score order. Equal scores keep insertion
/// order, so results are reproducible.
///
/// The default [`HashEmbedder`] is not semantic; inject a real embedder for
/// meaningful relevance.
#[derive(Debug)]
pub struct RetrievalMemory {
    state: RwLock<RetrievalState>,
    embedder: Arc<dyn Embedder>,
}

impl Default for RetrievalMemory {
    fn default() -> Self {
        Self::new(RetrievalConfig::default())
    }
}

impl RetrievalMemory {
    /// Create a retrieval memory with the default hash embedder.
    pub fn new(config: RetrievalConfig) -> Self {
        Self::with_embedder(config, Arc::new(HashEmbedder::default()))
    }

    /// Create a retrieval memory with a custom embedder.
    pub fn with_embedder(config: RetrievalConfig, embedder: Arc<dyn Embedder>) -> Self {
        let config = config.normalized();
        info!(
            "Creating RetrievalMemory (top_k={}, embedder={}, dimension={})",
            config.top_k,
            embedder.name(),
            embedder.dimension()
        );

        Self {
            state: RwLock::new(RetrievalState {
                top_k: config.top_k,
                ..RetrievalState::default()
            }),
            embedder,
        }
    }

    /// Change the number of messages returned per query. Zero is ignored.
    pub async fn set_top_k(&self, top_k: usize) {
        if top_k > 0 {
            self.state.write().await.top_k = top_k;
        }
    }

    /// Number of messages returned per query.
    pub async fn top_k(&self) -> usize {
        self.state.read().await.top_k
    }
}

#[async_trait]
impl MemoryStrategy for RetrievalMemory {
    async fn add_message(&self, message: Message) -> Result<()> {
        let mut state = self.state.write().await;

        let embedding = self
            .embedder
            .embed(&message.content)
            .await
            .map_err(|e| MemoryError::embedding(format!("failed to generate embedding: {e}")))?;

        debug!("Indexed message {} for retrieval", message.id);
        state.embeddings.insert(message.id.clone(), embedding);
        state.messages.push(message);
        Ok(())
    }

    async fn get_context(&self, query: &str) -> Result<Vec<Message>> {
        let state = self.state.read().await;

        if state.messages.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed(query).await.map_err(|e| {
            MemoryError::embedding(format!("failed to generate query embedding: {e}"))
        })?;

        let mut scored: Vec<(&Message, f32)> = state
            .messages
            .iter()
            .map(|msg| {
                let score = state
                    .embeddings
                    .get(&msg.id)
                    .map_or(0.0, |embedding| cosine_similarity(&query_embedding, embedding));
                (msg, score)
            })
            .collect();

        // Stable sort: equal scores keep insertion order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let k = state.top_k.min(scored.len());
        debug!(
            "Retrieved {} of {} messages for query ({} chars)",
            k,
            scored.len(),
            query.len()
        );

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(msg, _)| msg.clone())
            .collect())
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.messages.clear();
        state.embeddings.clear();
        info!("Cleared retrieval memory");
        Ok(())
    }

    /// Active figures approximate the cost of one retrieval using the first
    /// `top_k` messages in insertion order, not the last query's selection.
    async fn get_stats(&self) -> Result<MemoryStats> {
        let state = self.state.read().await;

        let total = total_tokens(&state.messages);
        let k = state.top_k.min(state.messages.len());
        let active = total_tokens(&state.messages[..k]);

        Ok(MemoryStats {
            total_messages: state.messages.len(),
            total_tokens: total,
            active_messages: k,
            active_tokens: active,
            compression_rate: compression_rate(active, total),
        })
    }

    fn name(&self) -> &'static str {
        "retrieval"
    }
}
