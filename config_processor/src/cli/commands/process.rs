use crate::cli::ModeArg;
use crate::config::ConfigManager;
use crate::core::{ProcessingMode, ProcessingResult};
use crate::processor::DataProcessor;
use anyhow::Result;
use std::io::Write;

/// モード未指定なら `processing.mode` を使う
fn resolve_mode(
    processor: &DataProcessor<ConfigManager>,
    mode: Option<ModeArg>,
) -> Result<ProcessingMode> {
    match mode {
        Some(mode) => Ok(mode.into()),
        None => Ok(processor.configured_mode()?),
    }
}

/// 単一アイテムを処理して結果を出力
///
/// 処理に成功したかどうかを返す
pub fn execute_item<W: Write>(
    processor: &mut DataProcessor<ConfigManager>,
    text: &str,
    mode: Option<ModeArg>,
    json: bool,
    out: &mut W,
) -> Result<bool> {
    let mode = resolve_mode(processor, mode)?;
    let result = processor.process_item(text, mode);
    write_report(processor, &result, json, out)?;
    Ok(result.success)
}

/// バッチを処理して結果を出力
pub fn execute_batch<W: Write>(
    processor: &mut DataProcessor<ConfigManager>,
    items: &[String],
    mode: Option<ModeArg>,
    json: bool,
    out: &mut W,
) -> Result<bool> {
    let mode = resolve_mode(processor, mode)?;
    let result = processor.process_batch(items, mode);
    write_report(processor, &result, json, out)?;
    Ok(result.success)
}

fn write_report<W: Write>(
    processor: &DataProcessor<ConfigManager>,
    result: &ProcessingResult,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        let report = serde_json::json!({
            "success": result.success,
            "result": result.result,
            "error_message": result.error_message,
            "processed_items": result.processed_items,
            "statistics": processor.statistics(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if result.success {
        writeln!(out, "✓ {}", result.result)?;
        writeln!(out, "Items processed: {}", result.processed_items)?;
    } else {
        match &result.error {
            Some(error) => writeln!(
                out,
                "✗ Error [{}]: {}",
                error.severity().as_str(),
                result.error_message
            )?,
            None => writeln!(out, "✗ Error: {}", result.error_message)?,
        }
    }
    writeln!(out)?;
    writeln!(out, "{}", processor.get_statistics())?;
    Ok(())
}
