use anyhow::Result;
use clap::Parser;
use config_processor::cli::{self, Cli, Commands};
use config_processor::config::defaults::{DEFAULT_LOG_LEVEL, LOG_LEVEL_KEY};
use config_processor::logging::init_logging;
use config_processor::DataProcessor;

fn main() -> Result<()> {
    let args = Cli::parse();

    // 設定読み込み時のログも出すため先に初期化し、logging.level は後から反映
    let logging = init_logging(args.verbose);

    // 設定ストアの構築（デフォルト → ファイル → --set）
    let config = cli::build_config(args.config.as_deref(), &args.overrides)?;
    logging.apply_config_level(&config.get_value(LOG_LEVEL_KEY, DEFAULT_LOG_LEVEL));

    let mut stdout = std::io::stdout().lock();
    let success = match args.command {
        Commands::Keys => {
            cli::execute_keys(&config, &mut stdout)?;
            true
        }
        Commands::Item { text, mode } => {
            let mut processor = DataProcessor::new(config);
            cli::execute_item(&mut processor, &text, mode, args.json, &mut stdout)?
        }
        Commands::Batch { items, mode } => {
            let mut processor = DataProcessor::new(config);
            cli::execute_batch(&mut processor, &items, mode, args.json, &mut stdout)?
        }
    };

    if !success {
        drop(stdout);
        std::process::exit(1);
    }

    Ok(())
}
