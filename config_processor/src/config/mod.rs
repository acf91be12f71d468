// 設定ストア
//
// フラットな文字列キーと文字列値の設定管理:
// - defaults.rs - デフォルト設定テーブルとキー名
// - parser.rs   - `key = value` 行パーサー
// - manager.rs  - ConfigManager 本体とビルダー

pub mod defaults;
pub mod manager;
pub mod parser;

// 公開API
pub use defaults::DEFAULT_CONFIG;
pub use manager::{ConfigManager, ConfigManagerBuilder};
pub use parser::parse_config_line;
