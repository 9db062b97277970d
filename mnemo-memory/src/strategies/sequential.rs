//! Keep-everything memory.

use async_trait::async_trait;
use mnemo_core::{MemoryStats, Message, Result, traits::MemoryStrategy};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Stores the complete conversation history in insertion order.
///
/// Perfect recall at the price of unbounded growth: token cost rises with
/// every turn, so callers must enforce their own ceiling upstream.
#[derive(Debug)]
pub struct SequentialMemory {
    messages: RwLock<Vec<Message>>,
}

impl Default for SequentialMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialMemory {
    /// Create an empty sequential memory.
    pub fn new() -> Self {
        info!("Creating SequentialMemory");
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MemoryStrategy for SequentialMemory {
    async fn add_message(&self, message: Message) -> Result<()> {
        let mut messages = self.messages.write().await;
        debug!("Appending message {} to sequential memory", message.id);
        messages.push(message);
        Ok(())
    }

    async fn get_context(&self, _query: &str) -> Result<Vec<Message>> {
        Ok(self.messages.read().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        self.messages.write().await.clear();
        info!("Cleared sequential memory");
        Ok(())
    }

    async fn get_stats(&self) -> Result<MemoryStats> {
        Ok(MemoryStats::uncompressed(&self.messages.read().await))
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
