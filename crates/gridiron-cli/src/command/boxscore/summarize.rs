use clap::Args;
use gridiron_boxscore::{list::BoxScoreList, summary::BoxScoreSummaryList};

use crate::{report::OutputArg, util::DataDir};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummarizeArg {
    /// Season to summarize (default: every year under `raw/`)
    #[arg(short, long)]
    year: Option<i32>,

    /// Only summarize this team
    #[arg(short, long)]
    team: Option<String>,

    /// Emit only the offense rows
    #[arg(long, conflicts_with = "defense")]
    offense: bool,

    /// Emit only the defense rows
    #[arg(long)]
    defense: bool,

    #[command(flatten)]
    output: OutputArg,
}

pub(crate) fn run(arg: &SummarizeArg, data: &DataDir) -> anyhow::Result<()> {
    let mut summaries = BoxScoreSummaryList::new();
    for year in data.years_or_all(arg.year)? {
        let scores = data.load_raw_year(year)?;
        let explicit_year = arg.year.is_some();
        if let Some(year_summaries) =
            summarize_year(&scores, year, arg.team.as_deref(), explicit_year)?
        {
            summaries.add_summaries(year_summaries);
        }
    }
    tracing::info!(summaries = summaries.len(), "summarized box scores");

    if arg.offense {
        arg.output.write(summaries.offense_rows().as_slice())
    } else if arg.defense {
        arg.output.write(summaries.defense_rows().as_slice())
    } else {
        arg.output.write(&summaries)
    }
}

/// Summaries of one season, or `None` when `team` did not play that year
/// and the year was not requested explicitly.
fn summarize_year(
    scores: &BoxScoreList,
    year: i32,
    team: Option<&str>,
    explicit_year: bool,
) -> anyhow::Result<Option<BoxScoreSummaryList>> {
    let season = scores.to_season(year);
    let Some(team) = team else {
        return Ok(Some(season.summarize()));
    };
    match season.team_box_scores(team) {
        Ok(games) => Ok(Some(
            [games.summarize_team(team).with_year(year)].into_iter().collect(),
        )),
        Err(e) if !explicit_year => {
            tracing::warn!(year, "skipping season: {e}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridiron_boxscore::box_score::BoxScore;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        arg: SummarizeArg,
    }

    fn scores() -> BoxScoreList {
        BoxScoreList::new(vec![
            BoxScore::new("w1", "A", 20, "B", 10),
            BoxScore::new("w2", "B", 30, "C", 0),
        ])
    }

    #[test]
    fn test_whole_season_is_sorted_by_team() {
        let summaries = summarize_year(&scores(), 2023, None, false).unwrap().unwrap();
        let teams = summaries.iter().map(|s| s.team.as_str()).collect::<Vec<_>>();
        assert_eq!(teams, ["2023 A", "2023 B", "2023 C"]);
    }

    #[test]
    fn test_team_summary() {
        let summaries = summarize_year(&scores(), 2023, Some("B"), true).unwrap().unwrap();
        assert_eq!(summaries.len(), 1);
        let summary = &summaries.as_slice()[0];
        assert_eq!(summary.team, "2023 B");
        assert_eq!(summary.offense.count, 2);
        assert_eq!(summary.offense.mean, Some(20.0));
        assert_eq!(summary.defense.mean, Some(10.0));
    }

    #[test]
    fn test_missing_team_is_skipped_unless_year_is_explicit() {
        assert!(summarize_year(&scores(), 2023, Some("Z"), false).unwrap().is_none());
        assert!(summarize_year(&scores(), 2023, Some("Z"), true).is_err());
    }

    #[test]
    fn test_offense_and_defense_conflict() {
        let parse = |args: &[&str]| {
            TestArgs::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
        };
        assert!(parse(&["--offense"]).unwrap().arg.offense);
        assert!(parse(&["--defense", "-y", "2023"]).unwrap().arg.defense);
        assert!(parse(&["--offense", "--defense"]).is_err());
    }
}
