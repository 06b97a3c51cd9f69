use clap::Args;
use gridiron_boxscore::{list::BoxScoreList, season::TeamNotFoundError};

use crate::{report::OutputArg, util::DataDir};

#[derive(Debug, Clone, Args)]
pub(crate) struct ListArg {
    /// Season to list
    #[arg(short, long, default_value_t = 2023)]
    year: i32,

    /// Only list the games this team played
    #[arg(short, long)]
    team: Option<String>,

    #[command(flatten)]
    output: OutputArg,
}

pub(crate) fn run(arg: &ListArg, data: &DataDir) -> anyhow::Result<()> {
    let scores = data.load_raw_year(arg.year)?;
    let scores = match &arg.team {
        Some(team) => select_team(&scores, arg.year, team)?,
        None => scores,
    };
    arg.output.write(&scores)
}

fn select_team(scores: &BoxScoreList, year: i32, team: &str) -> anyhow::Result<BoxScoreList> {
    let games = scores.games_involving(team);
    if games.is_empty() {
        return Err(TeamNotFoundError {
            team: team.to_owned(),
        }
        .into());
    }
    tracing::debug!(year, team, games = games.len(), "selected team games");
    Ok(games)
}
