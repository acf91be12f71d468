// フラットな `key = value` 形式の設定行パーサー

/// 設定ファイルの1行を解析する
///
/// 空行と `#` で始まるコメント行（先頭の空白は無視）は `None`。
/// `=` を含まない行も読み飛ばすため `None` を返す。
/// キーと値は最初の `=` で分割し、前後の空白を取り除く。
pub fn parse_config_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (key, value) = trimmed.split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}
