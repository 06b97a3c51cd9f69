use clap::Subcommand;

use crate::util::DataDir;

use self::{skill_diff_scores::SkillDiffScoresArg, skill_diff_summary::SkillDiffSummaryArg};

mod skill_diff_scores;
mod skill_diff_summary;

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum LabeledMode {
    /// Extract offense/defense skill differential rows from the training set
    SkillDiffScores(#[clap(flatten)] SkillDiffScoresArg),
    /// Score statistics per skill differential
    SkillDiffSummary(#[clap(flatten)] SkillDiffSummaryArg),
}

pub(crate) fn run(mode: &LabeledMode, data: &DataDir) -> anyhow::Result<()> {
    match mode {
        LabeledMode::SkillDiffScores(arg) => skill_diff_scores::run(arg, data)?,
        LabeledMode::SkillDiffSummary(arg) => skill_diff_summary::run(arg, data)?,
    }
    Ok(())
}
