// 処理統計

use serde::Serialize;
use std::fmt;

/// データ処理器ごとの累積カウンタ
///
/// `process_item` / `process_batch` からのみ更新され、`reset` でのみ消去される
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStatistics {
    pub total_processed: usize,
    pub successful_operations: usize,
    pub failed_operations: usize,
}

impl ProcessingStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// 変換に成功したアイテムを記録
    pub(crate) fn record_success(&mut self, items: usize) {
        self.total_processed += items;
        self.successful_operations += items;
    }

    /// 失敗した呼び出しを記録
    pub(crate) fn record_failure(&mut self) {
        self.failed_operations += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 成功率（%）、操作が無ければ `None`
    pub fn success_rate(&self) -> Option<f64> {
        let attempted = self.successful_operations + self.failed_operations;
        if attempted == 0 {
            return None;
        }
        Some(self.successful_operations as f64 / attempted as f64 * 100.0)
    }
}

impl fmt::Display for ProcessingStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processing Statistics:")?;
        writeln!(f, "  Total Processed: {}", self.total_processed)?;
        writeln!(f, "  Successful Operations: {}", self.successful_operations)?;
        writeln!(f, "  Failed Operations: {}", self.failed_operations)?;
        match self.success_rate() {
            Some(rate) => write!(f, "  Success Rate: {rate:.2}%"),
            None => write!(f, "  Success Rate: N/A"),
        }
    }
}
