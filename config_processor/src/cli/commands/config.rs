use crate::config::{parse_config_line, ConfigManager};
use anyhow::{Context, Result};
use std::path::Path;

/// コマンドライン引数から設定ストアを構築
///
/// デフォルト → 設定ファイル → `--set` の順に後勝ちで適用する
pub fn build_config(config_path: Option<&Path>, overrides: &[String]) -> Result<ConfigManager> {
    let mut config = ConfigManager::new();

    if let Some(path) = config_path {
        config
            .try_load_from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
    }

    for entry in overrides {
        let (key, value) = parse_config_line(entry)
            .with_context(|| format!("Invalid --set value (expected KEY=VALUE): {entry}"))?;
        config.set_value(key, value);
    }

    Ok(config)
}
