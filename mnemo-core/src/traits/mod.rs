//! Core traits for the Mnemo framework.
//!
//! This module defines the memory strategy contract and the contracts of the
//! collaborators strategies consume: summarizers, embedders, and importance
//! scorers. Collaborators are injected as `Arc<dyn Trait>` so callers can
//! replace the placeholder defaults with LLM- or model-backed versions.

pub mod embedder;
pub mod memory;
pub mod scorer;
pub mod summarizer;

// Re-export all traits for convenience
pub use embedder::*;
pub use memory::*;
pub use scorer::*;
pub use summarizer::*;
