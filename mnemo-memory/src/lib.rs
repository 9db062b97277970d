//! Conversation memory strategies for the Mnemo framework.
//!
//! This crate provides the concrete retention policies behind
//! [`MemoryStrategy`](mnemo_core::traits::MemoryStrategy), together with the
//! default collaborators they consume:
//!
//! - **Strategies**: sequential, sliding window, buffer, summarization,
//!   retrieval, and hierarchical memory
//! - **Default collaborators**: [`ConcatSummarizer`], [`HashEmbedder`], and
//!   [`HeuristicImportanceScorer`]
//! - **Factory**: [`MemoryFactory`] builds a strategy from a
//!   [`MemoryConfig`](mnemo_core::config::MemoryConfig)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mnemo_core::{Message, config::MemoryConfig, traits::MemoryStrategy};
//! use mnemo_memory::create_memory;
//!
//! #[tokio::main]
//! async fn main() -> mnemo_core::Result<()> {
//!     let memory = create_memory(&MemoryConfig::from_json_str(
//!         r#"{"strategy": "sliding_window", "window_size": 4}"#,
//!     )?)?;
//!
//!     memory.add_message(Message::user("What is Rust?")).await?;
//!     memory.add_message(Message::assistant("A systems language.")).await?;
//!
//!     let context = memory.get_context("").await?;
//!     let stats = memory.get_stats().await?;
//!     println!("{} messages, {} tokens", context.len(), stats.active_tokens);
//!     Ok(())
//! }
//! ```
//!
//! # Collaborators
//!
//! The defaults are deterministic placeholders. Production deployments
//! inject an LLM-backed [`Summarizer`](mnemo_core::traits::Summarizer) and a
//! model-backed [`Embedder`](mnemo_core::traits::Embedder) through the
//! `with_*` constructors or the factory.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod embedding;
pub mod factory;
pub mod importance;
pub mod strategies;
pub mod summarizer;

pub use embedding::{HashEmbedder, cosine_similarity};
pub use factory::{MemoryFactory, create_memory};
pub use importance::HeuristicImportanceScorer;
pub use strategies::*;
pub use summarizer::ConcatSummarizer;
