//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! from the Mnemo core library for easy importing.
//!
//! # Examples
//!
//! ```rust
//! use mnemo_core::prelude::*;
//!
//! let msg = Message::assistant("Hello!");
//! let stats = MemoryStats::uncompressed(&[msg]);
//! assert_eq!(stats.total_messages, 1);
//! ```

// Re-export core error types
pub use crate::error::{MemoryError, Result};

// Re-export all data types
pub use crate::types::{MemoryStats, Message, MessageRole};

// Re-export core traits
pub use crate::traits::{Embedder, ImportanceScorer, MemoryStrategy, Summarizer};

// Re-export configuration types
pub use crate::config::{
    BufferConfig, HierarchicalConfig, MemoryConfig, RetrievalConfig, SlidingWindowConfig,
    SummarizationConfig,
};
