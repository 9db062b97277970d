//! Default embedder and vector math.
//!
//! [`HashEmbedder`] is a placeholder: it hashes character frequencies into a
//! fixed-size vector and captures no meaning. Replace it with a real
//! embedding model for semantic retrieval.

use async_trait::async_trait;
use mnemo_core::{Result, traits::Embedder};
use std::collections::HashMap;

/// Dimension of vectors produced by [`HashEmbedder::default`].
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 128;

/// Character-frequency hash embedder.
///
/// Each distinct character adds its occurrence count to bucket
/// `code point % dimension`; the vector is then L2-normalized. Identical
/// texts always produce identical vectors.
#[derive(Debug, Clone, Copy)]
pub struct HashEmbedder {
    dimension: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_EMBEDDING_DIMENSION,
        }
    }
}

impl HashEmbedder {
    /// Create an embedder with a custom dimension (zero selects the default).
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: if dimension == 0 {
                DEFAULT_EMBEDDING_DIMENSION
            } else {
                dimension
            },
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in text.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }

        let mut embedding = vec![0.0_f32; self.dimension];
        for (c, count) in counts {
            let bucket = (c as usize) % self.dimension;
            embedding[bucket] += count as f32;
        }

        normalize(&mut embedding);
        embedding
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.embed_sync(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Scale `vector` to unit length in place; zero vectors are left untouched.
pub fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

/// Calculate cosine similarity between two vectors.
///
/// Returns 0.0 when the lengths differ, either vector has zero norm, or the
/// result is not finite (NaN or infinite components).
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product = dot_product(a, b);
    let norm_a = (a.iter().map(|x| x * x).sum::<f32>()).sqrt();
    let norm_b = (b.iter().map(|x| x * x).sum::<f32>()).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let similarity = dot_product / (norm_a * norm_b);
    if similarity.is_finite() { similarity } else { 0.0 }
}

/// Calculate dot product between two vectors.
#[must_use]
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
