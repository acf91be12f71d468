// ログ出力の初期化

use crate::config::defaults::DEFAULT_LOG_LEVEL;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// `-v` の回数と設定値からログレベルを決める
///
/// `-v` が指定されればそれを優先し、無ければ `logging.level` の値を使う
pub fn resolve_log_level(config_level: &str, verbose: u8) -> String {
    match verbose {
        0 => {
            let level = config_level.trim().to_ascii_lowercase();
            match level.as_str() {
                "error" | "warn" | "info" | "debug" | "trace" | "off" => level,
                _ => "info".to_string(),
            }
        }
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// 初期化後にレベルを差し替えるためのハンドル
pub struct LogLevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
    verbose: u8,
}

impl LogLevelHandle {
    /// 設定ストアの `logging.level` を反映する
    ///
    /// `RUST_LOG` か `-v` が指定されている場合はそちらを維持する
    pub fn apply_config_level(&self, config_level: &str) {
        if let Some(level) = self.level_from_config(config_level) {
            let _ = self.handle.reload(EnvFilter::new(level));
        }
    }

    fn level_from_config(&self, config_level: &str) -> Option<String> {
        (!self.from_env && self.verbose == 0).then(|| resolve_log_level(config_level, 0))
    }
}

/// tracing-subscriber を初期化する
///
/// 設定ファイルの読み込みより前に呼ぶ。`RUST_LOG` が設定されていればそちらが優先され、
/// 無ければ `-v` の回数かデフォルトレベルを使う。二重初期化は無視する。
pub fn init_logging(verbose: u8) -> LogLevelHandle {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (
            EnvFilter::new(resolve_log_level(DEFAULT_LOG_LEVEL, verbose)),
            false,
        ),
    };
    let (filter, handle) = reload::Layer::new(filter);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr),
        )
        .try_init();

    LogLevelHandle {
        handle,
        from_env,
        verbose,
    }
}
