// 統合テスト用のヘルパー
// 設定ファイルの作成と処理器の組み立て

use config_processor::{ConfigManager, DataProcessor};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 一時ディレクトリに設定ファイルを作成
///
/// `TempDir` が破棄されるとファイルも消えるため、呼び出し側で保持すること
pub fn write_config_file(content: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.conf");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// バッチ上限を指定した処理器を作成
pub fn processor_with_batch_size(batch_size: &str) -> DataProcessor<ConfigManager> {
    let mut config = config_processor::create_config_manager();
    config.set_value("processing.batch_size", batch_size);
    config_processor::create_data_processor(Some(config)).unwrap()
}

/// `count` 個のアイテムを生成
pub fn items(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i}")).collect()
}
