// 処理に関連するデータ型定義

use super::error::ProcessingError;
use std::fmt;
use std::str::FromStr;

/// 処理モード
///
/// 出力に付与するタグと変換方法を選択するだけで、状態遷移は持たない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessingMode {
    #[default]
    Simple,
    Advanced,
    Batch,
}

impl ProcessingMode {
    pub const ALL: [ProcessingMode; 3] = [Self::Simple, Self::Advanced, Self::Batch];

    /// 出力の先頭に付与するタグ
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Simple => "[SIMPLE]",
            Self::Advanced => "[ADVANCED]",
            Self::Batch => "[BATCH]",
        }
    }

    /// 設定ファイルで使う名前
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Advanced => "advanced",
            Self::Batch => "batch",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessingMode {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "advanced" => Ok(Self::Advanced),
            "batch" => Ok(Self::Batch),
            _ => Err(ProcessingError::configuration(
                "processing.mode",
                s,
                "expected one of simple, advanced, batch",
            )),
        }
    }
}

/// 単一アイテムまたはバッチ処理の結果
///
/// `success` が真なら `result`、偽なら `error_message` のみが設定される
#[derive(Debug, Default)]
pub struct ProcessingResult {
    pub success: bool,
    pub result: String,
    pub error_message: String,
    pub processed_items: usize,
    /// 失敗時の構造化エラー
    pub error: Option<ProcessingError>,
}

impl ProcessingResult {
    /// 成功結果の作成
    pub fn succeeded(result: impl Into<String>, processed_items: usize) -> Self {
        Self {
            success: true,
            result: result.into(),
            error_message: String::new(),
            processed_items,
            error: None,
        }
    }

    /// 失敗結果の作成
    pub fn failed(error: ProcessingError) -> Self {
        Self {
            success: false,
            result: String::new(),
            error_message: error.to_string(),
            processed_items: 0,
            error: Some(error),
        }
    }
}

impl From<Result<(String, usize), ProcessingError>> for ProcessingResult {
    fn from(outcome: Result<(String, usize), ProcessingError>) -> Self {
        match outcome {
            Ok((result, processed_items)) => Self::succeeded(result, processed_items),
            Err(error) => Self::failed(error),
        }
    }
}
