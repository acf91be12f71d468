//! 設定ストアとデータ処理器の組み合わせデモ
//!
//! 実行: cargo run --example modular_demo

use config_processor::{create_config_manager, create_data_processor, ProcessingMode};
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    println!("=== 基本的な使い方 ===");
    let mut config = create_config_manager();
    config.set_value("processing.batch_size", "3");
    let mut processor = create_data_processor(Some(config))?;

    for item in ["Hello World", "Modular Architecture", ""] {
        let result = processor.process_item(item, ProcessingMode::Simple);
        if result.success {
            println!("  ✓ \"{item}\" → \"{}\"", result.result);
        } else {
            println!("  ✗ \"{item}\": {}", result.error_message);
        }
    }

    println!("\n=== バッチ処理 ===");
    let batches: [&[&str]; 2] = [&["item1", "item2", "item3"], &["a", "b", "c", "d"]];
    for batch in batches {
        let result = processor.process_batch(batch, ProcessingMode::Batch);
        if result.success {
            println!("  ✓ {} ({}件)", result.result, result.processed_items);
        } else {
            println!("  ✗ {}", result.error_message);
        }
    }
    println!("\n{}", processor.get_statistics());

    println!("\n=== 共有ストア ===");
    let shared = Rc::new(RefCell::new(create_config_manager()));
    let mut first = create_data_processor(Some(Rc::clone(&shared)))?;
    let mut second = create_data_processor(Some(Rc::clone(&shared)))?;

    first.set_processing_config("batch_size", "1");
    let result = second.process_batch(&["x", "y"], ProcessingMode::Batch);
    println!("  second processor sees the new limit: {}", result.error_message);

    Ok(())
}
