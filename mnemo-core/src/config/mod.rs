//! Configuration types for the Mnemo framework.
//!
//! This module provides type-safe configuration structures for every memory
//! strategy. Configurations are serializable and validatable.

pub mod memory;

// Re-export all config types for convenience
pub use memory::*;
