// 設定ストアとデータ処理のカスタムエラー型定義

use std::path::PathBuf;
use thiserror::Error;

/// データ処理固有のエラー型
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Dependency error: {component} cannot be null")]
    DependencyError { component: String },

    #[error("Validation error: {field} {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Configuration error: invalid value '{value}' for {key} - {reason}")]
    ConfigurationError {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Batch size {requested} exceeds configured limit of {limit}")]
    LimitExceededError { requested: usize, limit: usize },

    #[error("Could not open config file: {} - {source}", path.display())]
    ConfigFileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessingError {
    /// 依存関係エラーの作成
    pub fn dependency(component: impl Into<String>) -> Self {
        Self::DependencyError {
            component: component.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ConfigurationError {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// バッチ上限超過エラーの作成
    pub fn limit_exceeded(requested: usize, limit: usize) -> Self {
        Self::LimitExceededError { requested, limit }
    }

    /// 設定ファイル読み込みエラーの作成
    pub fn config_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigFileError {
            path: path.into(),
            source,
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DependencyError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationError { .. } | Self::ConfigFileError { .. } => ErrorSeverity::High,
            Self::LimitExceededError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 依存関係エラーのみ構築時に致命的となる
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::DependencyError { .. })
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 低重要度 - 入力の問題
    Low,
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 設定の見直しが必要
    High,
    /// 致命的 - 構築不可
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// データ処理の結果型
pub type ProcessorResult<T> = std::result::Result<T, ProcessingError>;
