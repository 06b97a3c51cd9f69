use std::collections::BTreeMap;

use crate::{box_score::BoxScore, list::BoxScoreList, summary::BoxScoreSummaryList};

/// The requested team never appeared in the season.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("team not found: {team}")]
pub struct TeamNotFoundError {
    pub team: String,
}

/// One year of box scores grouped by participating team.
///
/// Every game is registered under both its home and its away team, so each
/// team's sequence holds all of the games it played, in the order they were
/// added. A game whose home and away team are the same is registered twice
/// under that team.
///
/// Teams are kept in name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxScoreSeason {
    year: i32,
    teams: BTreeMap<String, Vec<BoxScore>>,
}

impl BoxScoreSeason {
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self {
            year,
            teams: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Registers `score` under both of its teams.
    pub fn add_game(&mut self, score: BoxScore) {
        self.teams
            .entry(score.home_team().to_owned())
            .or_default()
            .push(score.clone());
        self.teams
            .entry(score.away_team().to_owned())
            .or_default()
            .push(score);
    }

    /// Names of the teams that played this season, in name order.
    pub fn teams(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.teams.keys().map(String::as_str)
    }

    /// The games `team` played this season.
    pub fn team_box_scores(&self, team: &str) -> Result<BoxScoreList, TeamNotFoundError> {
        self.teams
            .get(team)
            .map(|scores| BoxScoreList::new(scores.clone()))
            .ok_or_else(|| TeamNotFoundError {
                team: team.to_owned(),
            })
    }

    /// Summarizes every team of the season.
    ///
    /// Summaries are labelled `"<year> <team>"` and ordered by team name.
    #[must_use]
    pub fn summarize(&self) -> BoxScoreSummaryList {
        let summaries = self
            .teams
            .iter()
            .map(|(team, scores)| {
                BoxScoreList::new(scores.clone())
                    .summarize_team(team)
                    .with_year(self.year)
            })
            .collect::<BoxScoreSummaryList>();
        tracing::debug!(year = self.year, teams = summaries.len(), "summarized season");
        summaries
    }
}
