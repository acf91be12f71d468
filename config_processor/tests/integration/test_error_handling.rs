// エラーハンドリングの統合テスト
use crate::fixtures::processor_with_batch_size;
use config_processor::{
    create_config_manager, create_data_processor, ConfigManager, ProcessingError, ProcessingMode,
};
use std::sync::{Arc, Mutex};

#[test]
fn test_empty_item_is_rejected() {
    let mut processor = processor_with_batch_size("10");
    let result = processor.process_item("", ProcessingMode::Simple);

    assert!(!result.success);
    assert!(result.result.is_empty());
    assert!(result.error_message.contains("empty"));
}

#[test]
fn test_invalid_batch_size_does_not_crash() {
    let mut config = create_config_manager();
    config.set_value("processing.batch_size", "invalid");
    let mut processor = create_data_processor(Some(config)).unwrap();

    let result = processor.process_batch(&["x"], ProcessingMode::Batch);

    assert!(!result.success);
    assert!(result.error_message.contains("invalid"));
    let error = result.error.expect("structured error expected");
    assert!(matches!(error, ProcessingError::ConfigurationError { .. }));
    assert!(error.is_recoverable());
}

#[test]
fn test_missing_store_is_fatal() {
    let result = create_data_processor::<ConfigManager>(None);

    let error = result.err().expect("construction must fail");
    assert!(error.to_string().contains("cannot be null"));
    assert!(!error.is_recoverable());
}

#[test]
fn test_recovery_after_errors() {
    let mut processor = processor_with_batch_size("2");

    assert!(!processor.process_item("   ", ProcessingMode::Simple).success);
    assert!(!processor
        .process_batch(&["1", "2", "3", "4", "5"], ProcessingMode::Batch)
        .success);

    let result = processor.process_item("Valid input", ProcessingMode::Simple);
    assert!(result.success);
    assert_eq!(result.result, "[SIMPLE] VALID INPUT");
    assert_eq!(processor.statistics().failed_operations, 2);
    assert_eq!(processor.statistics().successful_operations, 1);
}

#[test]
fn test_store_behind_mutex_across_threads() {
    let shared = Arc::new(Mutex::new(create_config_manager()));

    let writer = {
        let shared = Arc::clone(&shared);
        std::thread::spawn(move || {
            shared
                .lock()
                .unwrap()
                .set_value("processing.batch_size", "1");
        })
    };
    writer.join().unwrap();

    let mut processor = create_data_processor(Some(Arc::clone(&shared))).unwrap();
    let result = processor.process_batch(&["a", "b"], ProcessingMode::Batch);
    assert!(result.error_message.contains("exceeds configured limit of 1"));
}
