// バッチ処理の統合テスト
use crate::fixtures::{items, processor_with_batch_size};
use config_processor::{create_config_manager, create_data_processor, ProcessingMode};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_batch_at_limit_succeeds() {
    let mut processor = processor_with_batch_size("3");
    let result = processor.process_batch(&["a", "b", "c"], ProcessingMode::Batch);

    assert!(result.success);
    assert_eq!(result.processed_items, 3);
}

#[test]
fn test_batch_over_limit_fails() {
    let mut processor = processor_with_batch_size("2");
    let result = processor.process_batch(&["a", "b", "c"], ProcessingMode::Batch);

    assert!(!result.success);
    assert_eq!(result.processed_items, 0);
    assert!(result.error_message.contains("exceeds configured limit"));
}

#[test]
fn test_default_batch_size_boundary() {
    let mut processor = create_data_processor(Some(create_config_manager())).unwrap();

    let at_limit = processor.process_batch(&items("large", 10), ProcessingMode::Batch);
    assert!(at_limit.success);
    assert_eq!(at_limit.processed_items, 10);

    let over_limit = processor.process_batch(&items("exceed", 11), ProcessingMode::Batch);
    assert!(!over_limit.success);
    assert!(over_limit
        .error_message
        .contains("exceeds configured limit of 10"));
}

#[test]
fn test_batch_with_empty_item_skips_it() {
    let mut processor = create_data_processor(Some(create_config_manager())).unwrap();
    let result = processor.process_batch(&["a", "", "c"], ProcessingMode::Batch);

    assert!(result.success);
    assert_eq!(result.processed_items, 2);
    assert_eq!(result.result, "[BATCH] A, [BATCH] C");
    assert_eq!(processor.statistics().failed_operations, 0);
}

#[test]
fn test_batch_preserves_order() {
    let mut processor = processor_with_batch_size("5");
    let result = processor.process_batch(&items("item", 3), ProcessingMode::Simple);

    assert_eq!(
        result.result,
        "[SIMPLE] ITEM1, [SIMPLE] ITEM2, [SIMPLE] ITEM3"
    );
}

#[test]
fn test_statistics_across_items_and_batches() {
    let mut processor = processor_with_batch_size("2");

    processor.process_item("Hello World", ProcessingMode::Simple);
    processor.process_batch(&["x", "y"], ProcessingMode::Batch);
    processor.process_batch(&["x", "y", "z"], ProcessingMode::Batch);

    let stats = processor.get_statistics();
    assert!(stats.contains("Total Processed: 3"));
    assert!(stats.contains("Successful Operations: 3"));
    assert!(stats.contains("Failed Operations: 1"));

    processor.reset_statistics();
    let stats = processor.get_statistics();
    assert!(stats.contains("Total Processed: 0"));
    assert!(stats.contains("Successful Operations: 0"));
    assert!(stats.contains("Failed Operations: 0"));
}

#[test]
fn test_processors_share_one_store() {
    let shared = Rc::new(RefCell::new(create_config_manager()));
    let mut writer = create_data_processor(Some(Rc::clone(&shared))).unwrap();
    let mut reader = create_data_processor(Some(Rc::clone(&shared))).unwrap();

    writer.set_processing_config("batch_size", "20");

    let result = reader.process_batch(&items("bulk", 15), ProcessingMode::Batch);
    assert!(result.success);
    assert_eq!(result.processed_items, 15);
    assert_eq!(writer.statistics().total_processed, 0);
}
