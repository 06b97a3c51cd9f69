use clap::Subcommand;

use crate::util::DataDir;

use self::{
    aggregate::AggregateArg,
    frequency::FrequencyArg,
    list::ListArg,
    summarize::SummarizeArg,
    tie_frequency::{TieFrequencyArg, TieFrequencyBySkillArg},
};

mod aggregate;
mod frequency;
mod list;
mod summarize;
mod tie_frequency;

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum BoxscoreMode {
    /// List the games of a year
    List(#[clap(flatten)] ListArg),
    /// Summarize offense and defense per team
    Summarize(#[clap(flatten)] SummarizeArg),
    /// Split labeled box scores into training, validation and testing sets
    Aggregate(#[clap(flatten)] AggregateArg),
    /// Frequency of each points value
    Frequency(#[clap(flatten)] FrequencyArg),
    /// Tie frequency per year
    TieFrequency(#[clap(flatten)] TieFrequencyArg),
    /// Tie frequency per overall skill differential of the training set
    TieFrequencyBySkill(#[clap(flatten)] TieFrequencyBySkillArg),
}

pub(crate) fn run(mode: &BoxscoreMode, data: &DataDir) -> anyhow::Result<()> {
    match mode {
        BoxscoreMode::List(arg) => list::run(arg, data)?,
        BoxscoreMode::Summarize(arg) => summarize::run(arg, data)?,
        BoxscoreMode::Aggregate(arg) => aggregate::run(arg, data)?,
        BoxscoreMode::Frequency(arg) => frequency::run(arg, data)?,
        BoxscoreMode::TieFrequency(arg) => tie_frequency::run(arg, data)?,
        BoxscoreMode::TieFrequencyBySkill(arg) => tie_frequency::run_by_skill(arg, data)?,
    }
    Ok(())
}
