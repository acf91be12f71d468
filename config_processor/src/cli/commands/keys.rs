use crate::config::ConfigManager;
use anyhow::Result;
use std::io::Write;

/// 全ての設定キーと値を出力
pub fn execute_keys<W: Write>(config: &ConfigManager, out: &mut W) -> Result<()> {
    for (key, value) in config.iter() {
        writeln!(out, "{key} = {value}")?;
    }
    Ok(())
}
