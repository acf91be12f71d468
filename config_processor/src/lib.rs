pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod processor;
pub mod transform;

pub use crate::config::{ConfigManager, ConfigManagerBuilder};
pub use crate::core::{
    ConfigStore, ErrorSeverity, ProcessingError, ProcessingMode, ProcessingResult,
    ProcessorResult, TextTransform,
};
pub use crate::processor::{DataProcessor, ProcessingStatistics};
pub use crate::transform::UppercaseTransform;

/// デフォルト設定入りの設定ストアを作成
pub fn create_config_manager() -> ConfigManager {
    ConfigManager::new()
}

/// 設定ストアに依存するデータ処理器を作成
///
/// ストアが渡されなければ依存関係エラーとなり、処理器は作られない。
/// 共有するかどうかは呼び出し側が `S` の型で選ぶ（例: `Rc<RefCell<ConfigManager>>`）。
pub fn create_data_processor<S>(config: Option<S>) -> ProcessorResult<DataProcessor<S>>
where
    S: ConfigStore,
{
    DataProcessor::try_new(config)
}
