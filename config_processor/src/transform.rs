use crate::core::TextTransform;

/// 大文字変換
///
/// データ処理器が既定で使う純粋な変換
#[derive(Debug, Clone, Copy, Default)]
pub struct UppercaseTransform;

impl UppercaseTransform {
    pub fn new() -> Self {
        Self
    }
}

impl TextTransform for UppercaseTransform {
    fn transform(&self, input: &str) -> String {
        input.to_uppercase()
    }
}
