//! Integration tests for the configuration system.

use mnemo_core::config::{BufferConfig, HierarchicalConfig, MemoryConfig, SlidingWindowConfig};
use mnemo_core::MemoryError;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("memory.json");

    let config = serde_json::json!({
        "strategy": "buffer",
        "max_messages": 8,
        "max_tokens": 500,
        "auto_summarize": true
    });
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = MemoryConfig::from_json_file(&path).unwrap();
    assert_eq!(
        loaded,
        MemoryConfig::Buffer(
            BufferConfig::default()
                .with_max_messages(8)
                .with_max_tokens(500)
                .with_auto_summarize(true)
        )
    );
}

#[test]
fn test_saved_config_loads_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("memory.json");

    let config = MemoryConfig::Hierarchical(HierarchicalConfig::new(3, 5));
    std::fs::write(&path, config.to_json_string().unwrap()).unwrap();

    assert_eq!(MemoryConfig::from_json_file(&path).unwrap(), config);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = MemoryConfig::from_json_file(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MemoryError::Io(_)));
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("memory.json");
    std::fs::write(&path, "{ strategy: sliding_window").unwrap();

    let err = MemoryConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, MemoryError::Serialization(_)));
}

#[test]
fn test_zero_window_parses_and_normalizes() {
    let config = MemoryConfig::from_json_str(r#"{"strategy": "sliding_window", "window_size": 0}"#)
        .unwrap();
    let MemoryConfig::SlidingWindow(window) = config else {
        panic!("expected sliding window config");
    };
    assert_eq!(window.normalized(), SlidingWindowConfig::new(10));
}
