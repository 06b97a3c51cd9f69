use clap::Args;
use gridiron_boxscore::{
    box_score::BoxScore,
    frequency::{TieFrequency, tie_frequency_by_skill},
    labeled::LabeledBoxScore,
};

use crate::{
    report::OutputArg,
    util::{self, DataDir},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct TieFrequencyArg {
    #[command(flatten)]
    output: OutputArg,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TieFrequencyBySkillArg {
    #[command(flatten)]
    output: OutputArg,
}

pub(crate) fn run(arg: &TieFrequencyArg, data: &DataDir) -> anyhow::Result<()> {
    let mut rows = Vec::new();
    let mut all_games = Vec::<BoxScore>::new();
    for year in data.raw_years()? {
        let scores = data.load_raw_year(year)?;
        rows.push(TieFrequency::from_games(year.to_string(), &scores));
        all_games.extend(scores);
    }
    rows.push(TieFrequency::from_games("all", &all_games));
    arg.output.write(rows.as_slice())
}

pub(crate) fn run_by_skill(arg: &TieFrequencyBySkillArg, data: &DataDir) -> anyhow::Result<()> {
    let games: Vec<LabeledBoxScore> =
        util::read_json_file("training set", data.processed_file("training"))?;
    tracing::info!(games = games.len(), "loaded training set");
    arg.output.write(tie_frequency_by_skill(&games).as_slice())
}
