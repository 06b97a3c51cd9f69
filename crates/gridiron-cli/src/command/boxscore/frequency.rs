use clap::Args;
use gridiron_boxscore::{box_score::BoxScore, frequency::score_frequency};

use crate::{report::OutputArg, util::DataDir};

#[derive(Debug, Clone, Args)]
pub(crate) struct FrequencyArg {
    /// Season to count (default: every year under `raw/`)
    #[arg(short, long)]
    year: Option<i32>,

    #[command(flatten)]
    output: OutputArg,
}

pub(crate) fn run(arg: &FrequencyArg, data: &DataDir) -> anyhow::Result<()> {
    let mut games = Vec::<BoxScore>::new();
    for year in data.years_or_all(arg.year)? {
        games.extend(data.load_raw_year(year)?);
    }
    let frequencies = score_frequency(&games);
    tracing::info!(
        games = games.len(),
        values = frequencies.len(),
        "counted points values"
    );
    arg.output.write(frequencies.as_slice())
}
