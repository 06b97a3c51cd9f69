use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::util::{self, DataDir};

mod boxscore;
mod labeled;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Root of the data directory (`raw/`, `labeled/`, `processed/`, `preprocessed/`)
    #[arg(long, global = true, env = "GRIDIRON_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace); `RUST_LOG` takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Analyze historic box scores
    #[command(subcommand)]
    Boxscore(boxscore::BoxscoreMode),
    /// Analyze box scores labeled with skill tiers
    #[command(subcommand)]
    Labeled(labeled::LabeledMode),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    util::init_tracing(args.verbose);
    let data = DataDir::new(args.data_dir);
    match &args.mode {
        Mode::Boxscore(mode) => boxscore::run(mode, &data)?,
        Mode::Labeled(mode) => labeled::run(mode, &data)?,
    }
    Ok(())
}
