//! # Mnemo Core
//!
//! Core traits, types, and interfaces for the Mnemo conversation memory framework.
//!
//! Mnemo decides, for every turn of an LLM conversation, which prior messages
//! stay verbatim in the context window, which are compressed into summaries,
//! which are evicted, and which are retrieved by relevance. This crate
//! provides the foundational building blocks:
//!
//! - **Data structures**: [`Message`], [`MessageRole`], and [`MemoryStats`]
//! - **Core traits**: [`MemoryStrategy`], [`Summarizer`], [`Embedder`], [`ImportanceScorer`]
//! - **Configuration**: Serializable per-strategy configuration
//! - **Error handling**: [`MemoryError`] and the [`Result`] alias
//!
//! ## Quick Start
//!
//! ```rust
//! use mnemo_core::prelude::*;
//!
//! let msg = Message::user("My name is Ada").with_importance(0.9);
//! assert_eq!(msg.role, MessageRole::User);
//! ```
//!
//! Concrete strategies live in the `mnemo-memory` crate.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used types and traits
pub mod prelude;

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{MemoryError, Result};
pub use types::{MemoryStats, Message, MessageRole, estimate_tokens, generate_id};

// Re-export traits for convenience
pub use traits::*;

/// Version information for the Mnemo core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the Mnemo core library.
pub const NAME: &str = env!("CARGO_PKG_NAME");
