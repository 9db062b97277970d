//! Integration tests for the memory strategies.

use futures::future::join_all;
use mnemo_core::{
    Message, MessageRole,
    config::{
        BufferConfig, HierarchicalConfig, MemoryConfig, RetrievalConfig, SlidingWindowConfig,
        SummarizationConfig,
    },
    traits::MemoryStrategy,
};
use mnemo_memory::{MemoryFactory, SequentialMemory, SlidingWindowMemory, create_memory};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::{Arc, Mutex};
use test_case::test_case;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Log sink shared between a test and its scoped subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

/// Run `f` with an info-level subscriber and return what it logged.
fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

fn all_configs() -> Vec<MemoryConfig> {
    vec![
        MemoryConfig::Sequential,
        MemoryConfig::SlidingWindow(SlidingWindowConfig::new(3)),
        MemoryConfig::Buffer(
            BufferConfig::default()
                .with_max_messages(3)
                .with_auto_summarize(true),
        ),
        MemoryConfig::Summarization(SummarizationConfig::new(2, 3)),
        MemoryConfig::Retrieval(RetrievalConfig::new(2)),
        MemoryConfig::Hierarchical(HierarchicalConfig::new(2, 2)),
    ]
}

fn conversation() -> Vec<Message> {
    vec![
        Message::system("You are a helpful assistant"),
        Message::user("My name is Ada").with_importance(0.9),
        Message::assistant("Nice to meet you, Ada!"),
        Message::user("What is the capital of France?"),
        Message::assistant("The capital of France is Paris."),
        Message::user("And of Italy?"),
        Message::assistant("Rome."),
    ]
}

#[tokio::test]
async fn test_clear_is_idempotent_for_every_strategy() {
    init_tracing();

    for config in all_configs() {
        let memory = create_memory(&config).unwrap();
        memory.add_messages(conversation()).await.unwrap();
        assert!(
            !memory.get_context("Ada").await.unwrap().is_empty(),
            "{} returned no context",
            memory.name()
        );

        memory.clear().await.unwrap();
        memory.clear().await.unwrap();

        let stats = memory.get_stats().await.unwrap();
        assert!(stats.is_empty(), "{} not empty after clear", memory.name());
        assert_eq!(stats.total_tokens, 0);
        assert!(memory.get_context("Ada").await.unwrap().is_empty());
    }
}

#[test]
fn test_every_strategy_logs_construction() {
    let logs = capture_logs(|| {
        for config in all_configs() {
            create_memory(&config).unwrap();
        }
    });

    for strategy in [
        "SequentialMemory",
        "SlidingWindowMemory",
        "BufferMemory",
        "SummarizationMemory",
        "RetrievalMemory",
        "HierarchicalMemory",
    ] {
        assert!(
            logs.contains(&format!("Creating {strategy}")),
            "no construction log for {strategy}:\n{logs}"
        );
    }
}

#[tokio::test]
async fn test_stats_are_consistent_for_every_strategy() {
    for config in all_configs() {
        let memory = create_memory(&config).unwrap();
        memory.add_messages(conversation()).await.unwrap();

        let stats = memory.get_stats().await.unwrap();
        assert!(stats.compression_rate >= 0.0, "{}", memory.name());
        assert!(stats.active_tokens <= stats.total_tokens, "{}", memory.name());
        assert!(stats.total_messages > 0, "{}", memory.name());
    }
}

#[test_case(MemoryConfig::Sequential ; "sequential")]
#[test_case(MemoryConfig::SlidingWindow(SlidingWindowConfig::new(100)) ; "sliding window")]
#[test_case(MemoryConfig::Buffer(BufferConfig::default()) ; "unlimited buffer")]
#[tokio::test]
async fn test_token_accounting_matches_messages(config: MemoryConfig) {
    let memory = create_memory(&config).unwrap();
    let messages = conversation();
    let expected: usize = messages.iter().map(|m| m.token_count).sum();

    memory.add_messages(messages).await.unwrap();

    let stats = memory.get_stats().await.unwrap();
    assert_eq!(stats.total_tokens, expected);
    assert_eq!(stats.active_tokens, expected);

    let context_tokens: usize = memory
        .get_context("")
        .await
        .unwrap()
        .iter()
        .map(|m| m.token_count)
        .sum();
    assert_eq!(context_tokens, expected);
}

#[tokio::test]
async fn test_strategies_from_json_config() {
    let config = MemoryConfig::from_json_str(
        r#"{"strategy": "hierarchical", "recent_limit": 2, "important_limit": 4}"#,
    )
    .unwrap();
    let memory = MemoryFactory::new().create_memory(&config).unwrap();
    assert_eq!(memory.name(), "hierarchical");

    memory.add_messages(conversation()).await.unwrap();
    let context = memory.get_context("").await.unwrap();

    // the explicitly important introduction survives the small recent window
    assert!(context.iter().any(|m| m.content == "My name is Ada"));
    assert_eq!(context.last().map(|m| m.content.as_str()), Some("Rome."));
}

#[tokio::test]
async fn test_concurrent_adds_are_all_recorded() {
    let memory = Arc::new(SequentialMemory::new());

    let tasks = (0..32).map(|i| {
        let memory = Arc::clone(&memory);
        tokio::spawn(async move {
            memory
                .add_message(Message::user(format!("message {i}")))
                .await
        })
    });

    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let stats = memory.get_stats().await.unwrap();
    assert_eq!(stats.total_messages, 32);

    let mut ids: Vec<String> = memory
        .get_context("")
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 32);
}

#[tokio::test]
async fn test_concurrent_readers_and_writers() {
    let memory = Arc::new(SlidingWindowMemory::new(5));

    let writers = (0..20).map(|i| {
        let memory = Arc::clone(&memory);
        tokio::spawn(async move {
            memory
                .add_message(Message::assistant(format!("reply {i}")))
                .await
                .unwrap();
        })
    });
    let readers = (0..20).map(|_| {
        let memory = Arc::clone(&memory);
        tokio::spawn(async move {
            let context = memory.get_context("").await.unwrap();
            assert!(context.len() <= 5);
        })
    });

    for result in join_all(writers.chain(readers)).await {
        result.unwrap();
    }

    let context = memory.get_context("").await.unwrap();
    assert_eq!(context.len(), 5);
    assert!(context.iter().all(|m| m.role == MessageRole::Assistant));
}
