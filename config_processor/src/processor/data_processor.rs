use super::statistics::ProcessingStatistics;
use crate::config::defaults::{
    BATCH_SIZE_KEY, DEFAULT_BATCH_SIZE, DEFAULT_MODE, MODE_KEY, PROCESSING_PREFIX,
};
use crate::core::{
    ConfigStore, ProcessingError, ProcessingMode, ProcessingResult, ProcessorResult,
    TextTransform,
};
use crate::transform::UppercaseTransform;
use tracing::{debug, warn};

/// 設定ストアに依存してアイテムを検証・変換するデータ処理器
///
/// 設定は呼び出しのたびにストアから読み直す（キャッシュしない）。
/// 統計はインスタンスごとに保持され、ストアとは共有しない。
pub struct DataProcessor<S, T = UppercaseTransform>
where
    S: ConfigStore,
    T: TextTransform,
{
    config: S,
    transform: T,
    statistics: ProcessingStatistics,
}

impl<S> DataProcessor<S>
where
    S: ConfigStore,
{
    /// 既定の大文字変換でデータ処理器を作成
    pub fn new(config: S) -> Self {
        Self::with_transform(config, UppercaseTransform::new())
    }

    /// 設定ストアが無ければ依存関係エラーを返す
    pub fn try_new(config: Option<S>) -> ProcessorResult<Self> {
        config
            .map(Self::new)
            .ok_or_else(|| ProcessingError::dependency("ConfigManager"))
    }
}

impl<S, T> DataProcessor<S, T>
where
    S: ConfigStore,
    T: TextTransform,
{
    /// 変換を注入してデータ処理器を作成（コンストラクタインジェクション）
    pub fn with_transform(config: S, transform: T) -> Self {
        Self {
            config,
            transform,
            statistics: ProcessingStatistics::new(),
        }
    }

    /// 単一アイテムを処理
    pub fn process_item(&mut self, input: &str, mode: ProcessingMode) -> ProcessingResult {
        let outcome = validate_item(input).map(|()| (self.apply_processing(input, mode), 1));
        self.record(outcome, mode)
    }

    /// 複数アイテムをまとめて処理
    ///
    /// 件数が `processing.batch_size` を超える場合は1件も処理せずに全体を失敗とする。
    /// 空（空白のみ）のアイテムは読み飛ばし、`processed_items` は変換した件数になる。
    pub fn process_batch<I>(&mut self, inputs: &[I], mode: ProcessingMode) -> ProcessingResult
    where
        I: AsRef<str>,
    {
        let outcome = self.run_batch(inputs, mode);
        self.record(outcome, mode)
    }

    /// `processing.` 接頭辞付きでストアに書き込む
    pub fn set_processing_config(&mut self, key: &str, value: &str) {
        let full_key = format!("{PROCESSING_PREFIX}{key}");
        self.config.set_value(&full_key, value);
    }

    /// 統計を人が読める形式で取得
    pub fn get_statistics(&self) -> String {
        self.statistics.to_string()
    }

    pub fn statistics(&self) -> &ProcessingStatistics {
        &self.statistics
    }

    /// 統計をゼロに戻す（ストアには影響しない）
    pub fn reset_statistics(&mut self) {
        self.statistics.reset();
    }

    /// 現在のバッチ上限を設定から読み取る
    pub fn batch_limit(&self) -> ProcessorResult<usize> {
        let raw = self.config.get_value(BATCH_SIZE_KEY, DEFAULT_BATCH_SIZE);
        raw.trim().parse::<usize>().map_err(|e| {
            ProcessingError::configuration(
                BATCH_SIZE_KEY,
                raw.as_str(),
                format!("expected a non-negative integer ({e})"),
            )
        })
    }

    /// `processing.mode` に設定されたモード
    pub fn configured_mode(&self) -> ProcessorResult<ProcessingMode> {
        self.config.get_value(MODE_KEY, DEFAULT_MODE).parse()
    }

    pub fn config(&self) -> &S {
        &self.config
    }

    fn run_batch<I>(&self, inputs: &[I], mode: ProcessingMode) -> ProcessorResult<(String, usize)>
    where
        I: AsRef<str>,
    {
        let limit = self.batch_limit()?;
        if inputs.len() > limit {
            return Err(ProcessingError::limit_exceeded(inputs.len(), limit));
        }

        let processed: Vec<String> = inputs
            .iter()
            .map(|input| input.as_ref())
            .filter(|input| validate_item(input).is_ok())
            .map(|input| self.apply_processing(input, mode))
            .collect();
        if processed.len() < inputs.len() {
            debug!("Skipped {} empty item(s) in batch", inputs.len() - processed.len());
        }
        Ok((processed.join(", "), processed.len()))
    }

    fn apply_processing(&self, input: &str, mode: ProcessingMode) -> String {
        let transformed = match mode {
            ProcessingMode::Simple | ProcessingMode::Advanced => self.transform.transform(input),
            ProcessingMode::Batch => self.transform.transform(input.trim()),
        };
        format!("{} {transformed}", mode.tag())
    }

    fn record(
        &mut self,
        outcome: ProcessorResult<(String, usize)>,
        mode: ProcessingMode,
    ) -> ProcessingResult {
        match &outcome {
            Ok((_, items)) => {
                debug!("Processed {items} item(s) in {mode} mode");
                self.statistics.record_success(*items);
            }
            Err(error) => {
                warn!("Processing failed in {mode} mode: {error}");
                self.statistics.record_failure();
            }
        }
        outcome.into()
    }
}

fn validate_item(input: &str) -> ProcessorResult<()> {
    if input.trim().is_empty() {
        return Err(ProcessingError::validation("input", "cannot be empty"));
    }
    Ok(())
}
