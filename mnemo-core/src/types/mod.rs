//! Core data types for the Mnemo framework.
//!
//! This module contains the conversation message model and the statistics
//! every memory strategy reports.

pub mod message;
pub mod stats;

// Re-export all types for convenience
pub use message::*;
pub use stats::*;
