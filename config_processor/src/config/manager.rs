use super::defaults::DEFAULT_CONFIG;
use super::parser::parse_config_line;
use crate::core::{ConfigStore, ProcessingError, ProcessorResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// アプリケーション設定を管理するキーと値のストア
///
/// キー順（辞書順）で保持するため `get_all_keys` の順序はストアの生存中は安定。
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_data: BTreeMap<String, String>,
    is_loaded: bool,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// デフォルト設定を投入したストアを作成
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// デフォルト値を差し替えられるビルダーを取得
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::new()
    }

    /// 値を設定（後勝ち、値の検証はしない）
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.config_data.insert(key.into(), value.into());
    }

    /// 値を取得（キーが無ければデフォルト値）
    pub fn get_value(&self, key: &str, default: &str) -> String {
        self.config_data
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.config_data.contains_key(key)
    }

    /// 全てのキーを取得
    pub fn get_all_keys(&self) -> Vec<String> {
        self.config_data.keys().cloned().collect()
    }

    /// キーと値の組を順に走査
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.config_data
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.config_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.config_data.is_empty()
    }

    /// ファイル読み込みが成功済みかどうか
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// デフォルトを含む全ての設定を削除
    pub fn clear(&mut self) {
        self.config_data.clear();
        self.is_loaded = false;
    }

    /// 設定ファイルを読み込む
    ///
    /// ファイルを開けなければ `false`。`=` を含まない行は読み飛ばす。
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> bool {
        match self.try_load_from_file(path) {
            Ok(_) => true,
            Err(error) => {
                warn!("{error}");
                false
            }
        }
    }

    /// 設定ファイルを読み込み、適用したキー数を返す
    ///
    /// 行ごとに UTF-8 として解釈し、不正なバイトは置換文字になる（その行だけに影響）
    pub fn try_load_from_file(&mut self, path: impl AsRef<Path>) -> ProcessorResult<usize> {
        let path = path.as_ref();
        let mut content = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut content))
            .map_err(|source| ProcessingError::config_file(path, source))?;

        let mut applied = 0;
        for (line_number, raw) in content.split(|byte| *byte == b'\n').enumerate() {
            if self.apply_line(line_number, &String::from_utf8_lossy(raw)) {
                applied += 1;
            }
        }
        self.is_loaded = true;
        info!("Loaded {applied} config entries from {}", path.display());
        Ok(applied)
    }

    /// 文字列から設定を読み込み、適用したキー数を返す
    pub fn load_from_str(&mut self, content: &str) -> usize {
        let mut applied = 0;
        for (line_number, line) in content.lines().enumerate() {
            if self.apply_line(line_number, line) {
                applied += 1;
            }
        }
        applied
    }

    /// 1行を解釈して適用し、キーを設定したかどうかを返す
    fn apply_line(&mut self, line_number: usize, line: &str) -> bool {
        match parse_config_line(line) {
            Some((key, value)) => {
                self.set_value(key, value);
                true
            }
            None if line.trim().is_empty() || line.trim_start().starts_with('#') => false,
            None => {
                debug!("Skipping malformed config line {}: {line}", line_number + 1);
                false
            }
        }
    }
}

impl ConfigStore for ConfigManager {
    fn get_value(&self, key: &str, default: &str) -> String {
        ConfigManager::get_value(self, key, default)
    }

    fn set_value(&mut self, key: &str, value: &str) {
        ConfigManager::set_value(self, key, value)
    }

    fn has_key(&self, key: &str) -> bool {
        ConfigManager::has_key(self, key)
    }
}

/// `ConfigManager` のビルダー
///
/// デフォルトは定数テーブルとして渡すため、グローバル状態を持たない
#[derive(Debug, Clone)]
pub struct ConfigManagerBuilder {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl Default for ConfigManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManagerBuilder {
    pub fn new() -> Self {
        Self {
            defaults: to_owned_pairs(DEFAULT_CONFIG),
            overrides: Vec::new(),
        }
    }

    /// デフォルトテーブルを差し替える
    pub fn with_defaults(mut self, defaults: &[(&str, &str)]) -> Self {
        self.defaults = to_owned_pairs(defaults);
        self
    }

    /// デフォルトなしで開始する
    pub fn without_defaults(mut self) -> Self {
        self.defaults.clear();
        self
    }

    /// 追加の値を設定（デフォルトより優先）
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> ConfigManager {
        let config_data = self.defaults.into_iter().chain(self.overrides).collect();
        ConfigManager {
            config_data,
            is_loaded: false,
        }
    }
}

fn to_owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
