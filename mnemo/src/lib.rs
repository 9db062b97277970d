//! # Mnemo - Conversation Memory for LLM Agents
//!
//! Mnemo decides, for every turn of a conversation, which prior messages
//! stay verbatim in the model's context window, which are compressed into
//! summaries, which are evicted, and which are retrieved by relevance.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mnemo::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let memory = HierarchicalMemory::new(HierarchicalConfig::new(4, 8));
//!
//!     memory
//!         .add_message(Message::user("My name is Ada").with_importance(0.9))
//!         .await?;
//!     memory.add_message(Message::assistant("Nice to meet you, Ada!")).await?;
//!
//!     for message in memory.get_context("").await? {
//!         println!("{}: {}", message.role, message.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The framework is organized into several modules:
//!
//! - **mnemo-core**: Message model, traits, configuration, and errors
//! - **mnemo-memory**: Strategies, default collaborators, and the factory

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export all public APIs from sub-crates
pub use mnemo_core as core;
pub use mnemo_memory as memory;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits
/// from all Mnemo modules.
pub mod prelude {
    // Re-export core prelude
    pub use mnemo_core::prelude::*;

    pub use mnemo_memory::{
        BufferMemory, ConcatSummarizer, HashEmbedder, HeuristicImportanceScorer,
        HierarchicalMemory, MemoryFactory, RetrievalMemory, SequentialMemory,
        SlidingWindowMemory, SummarizationMemory, create_memory,
    };
}

/// Version information for the Mnemo framework.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
