use std::path::PathBuf;

use clap::Args;
use gridiron_boxscore::skill::{SkillDiffScore, Venue, summarize_skill_diffs};

use crate::{
    report::OutputArg,
    util::{self, DataDir},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SkillDiffSummaryArg {
    /// Only include home offenses
    #[arg(long, conflicts_with = "away")]
    home: bool,

    /// Only include away offenses
    #[arg(long)]
    away: bool,

    /// Skill differential rows (default: `preprocessed/skill_diff_scores.json`)
    #[arg(long)]
    input: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArg,
}

impl SkillDiffSummaryArg {
    fn venue(&self) -> Venue {
        match (self.home, self.away) {
            (true, _) => Venue::Home,
            (_, true) => Venue::Away,
            _ => Venue::All,
        }
    }
}

pub(crate) fn run(arg: &SkillDiffSummaryArg, data: &DataDir) -> anyhow::Result<()> {
    let input = arg
        .input
        .clone()
        .unwrap_or_else(|| data.preprocessed_file("skill_diff_scores"));
    let rows: Vec<SkillDiffScore> = util::read_json_file("skill differential", &input)?;

    let venue = arg.venue();
    let summaries = summarize_skill_diffs(&rows, venue);
    tracing::info!(
        rows = rows.len(),
        groups = summaries.len(),
        ?venue,
        "summarized skill differentials"
    );
    arg.output.write(summaries.as_slice())
}
