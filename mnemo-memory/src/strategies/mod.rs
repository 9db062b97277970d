//! Memory strategy implementations.
//!
//! Each strategy implements [`MemoryStrategy`](mnemo_core::traits::MemoryStrategy)
//! and owns its state behind a single `tokio::sync::RwLock`:
//!
//! - [`SequentialMemory`]: keeps everything
//! - [`SlidingWindowMemory`]: keeps the newest N messages
//! - [`BufferMemory`]: message and token limits with optional summarization
//! - [`SummarizationMemory`]: recent window plus accumulated summaries
//! - [`RetrievalMemory`]: top-K by embedding similarity
//! - [`HierarchicalMemory`]: recent, important, and archived layers

pub mod buffer;
pub mod hierarchical;
pub mod retrieval;
pub mod sequential;
pub mod sliding_window;
pub mod summarization;

pub use buffer::BufferMemory;
pub use hierarchical::HierarchicalMemory;
pub use retrieval::RetrievalMemory;
pub use sequential::SequentialMemory;
pub use sliding_window::SlidingWindowMemory;
pub use summarization::SummarizationMemory;
