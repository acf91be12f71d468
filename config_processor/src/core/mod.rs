// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{ErrorSeverity, ProcessingError, ProcessorResult};
pub use traits::{ConfigStore, TextTransform};
pub use types::{ProcessingMode, ProcessingResult};

// mockallが生成したモック（テスト・組み込み側の検証用）
pub use traits::{MockConfigStore, MockTextTransform};
