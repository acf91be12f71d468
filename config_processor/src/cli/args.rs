use crate::core::ProcessingMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "config_processor")]
#[command(about = "Validate and batch-process text items driven by a flat key/value config")]
#[command(version)]
pub struct Cli {
    /// Config file with `key = value` lines
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override a config value (repeatable), e.g. --set processing.batch_size=5
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", global = true)]
    pub overrides: Vec<String>,

    /// Print statistics as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a single item
    Item {
        /// Text to process
        text: String,

        /// Processing mode (defaults to processing.mode from config)
        #[arg(short, long)]
        mode: Option<ModeArg>,
    },

    /// Process several items as one all-or-nothing batch
    Batch {
        /// Items to process
        #[arg(required = true)]
        items: Vec<String>,

        /// Processing mode (defaults to processing.mode from config)
        #[arg(short, long)]
        mode: Option<ModeArg>,
    },

    /// List every config key with its value
    Keys,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Simple,
    Advanced,
    Batch,
}

impl From<ModeArg> for ProcessingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => ProcessingMode::Simple,
            ModeArg::Advanced => ProcessingMode::Advanced,
            ModeArg::Batch => ProcessingMode::Batch,
        }
    }
}
