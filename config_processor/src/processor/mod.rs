// データ処理と統計
//
// - data_processor.rs - 設定ストアに依存した検証・変換・バッチ処理
// - statistics.rs     - 累積カウンタと整形済みレポート

pub mod data_processor;
pub mod statistics;

// 公開API
pub use data_processor::DataProcessor;
pub use statistics::ProcessingStatistics;
