// デフォルト設定テーブル

/// 作成直後のストアに投入されるキーと値
pub const DEFAULT_CONFIG: &[(&str, &str)] = &[
    ("app.name", "config-processor"),
    ("app.version", "1.0.0"),
    ("processing.mode", "simple"),
    ("processing.batch_size", "10"),
    ("logging.level", "info"),
];

/// `processing.batch_size` が読めない場合に使う値
pub const DEFAULT_BATCH_SIZE: &str = "10";

/// `processing.mode` が読めない場合に使う値
pub const DEFAULT_MODE: &str = "simple";

/// `logging.level` が読めない場合に使う値
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const BATCH_SIZE_KEY: &str = "processing.batch_size";
pub const MODE_KEY: &str = "processing.mode";
pub const LOG_LEVEL_KEY: &str = "logging.level";

/// `DataProcessor::set_processing_config` が付与する接頭辞
pub const PROCESSING_PREFIX: &str = "processing.";
