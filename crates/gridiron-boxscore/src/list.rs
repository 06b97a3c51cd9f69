use std::{fmt, slice};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    box_score::{BoxScore, TeamScore},
    schema::{self, JsonPath, ValidationError},
    season::BoxScoreSeason,
    summary::BoxScoreSummary,
};

/// An ordered collection of validated box scores.
///
/// Games keep the order they were supplied in; duplicates are kept.
///
/// # Examples
///
/// ```
/// use gridiron_boxscore::{box_score::TeamScore, list::BoxScoreList};
/// use serde_json::json;
///
/// let list = BoxScoreList::from_value(&json!([
///     {"date": "2023-01-01", "home_team": "A", "home_score": 20, "away_team": "B", "away_score": 10},
/// ]))?;
///
/// assert_eq!(list.team_scores("A"), [TeamScore { offense: 20, defense: 10 }]);
/// assert_eq!(list.team_scores("B"), [TeamScore { offense: 10, defense: 20 }]);
/// assert_eq!(list.to_season(2023).teams().collect::<Vec<_>>(), ["A", "B"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Vec<BoxScore>")]
pub struct BoxScoreList {
    scores: Vec<BoxScore>,
}

impl BoxScoreList {
    #[must_use]
    pub fn new(scores: Vec<BoxScore>) -> Self {
        Self { scores }
    }

    /// Validates a raw JSON array and builds a list from it.
    ///
    /// Construction is all-or-nothing: the first element violating the
    /// schema is reported and no list is produced.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let scores = schema::parse_array(value, &JsonPath::root(), BoxScore::parse)?;
        Ok(Self { scores })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, BoxScore> {
        self.scores.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[BoxScore] {
        &self.scores
    }

    /// Points scored and allowed by `team` in every game it played, in list order.
    #[must_use]
    pub fn team_scores(&self, team: &str) -> Vec<TeamScore> {
        self.scores
            .iter()
            .filter_map(|score| score.team_score(team))
            .collect()
    }

    /// Descriptive statistics of `team`'s offense and defense over this list.
    ///
    /// A team that played no games gets a summary with a count of zero and
    /// undefined statistics.
    #[must_use]
    pub fn summarize_team(&self, team: &str) -> BoxScoreSummary {
        BoxScoreSummary::from_team_scores(team, &self.team_scores(team))
    }

    /// The games `team` played, as a new list.
    #[must_use]
    pub fn games_involving(&self, team: &str) -> Self {
        self.scores
            .iter()
            .filter(|score| score.involves(team))
            .cloned()
            .collect()
    }

    /// Groups the games of this list by team.
    #[must_use]
    pub fn to_season(&self, year: i32) -> BoxScoreSeason {
        let mut season = BoxScoreSeason::new(year);
        for score in &self.scores {
            season.add_game(score.clone());
        }
        season
    }
}

impl TryFrom<Value> for BoxScoreList {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<Vec<BoxScore>> for BoxScoreList {
    fn from(scores: Vec<BoxScore>) -> Self {
        Self::new(scores)
    }
}

impl From<BoxScoreList> for Vec<BoxScore> {
    fn from(list: BoxScoreList) -> Self {
        list.scores
    }
}

impl FromIterator<BoxScore> for BoxScoreList {
    fn from_iter<I: IntoIterator<Item = BoxScore>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for BoxScoreList {
    type Item = BoxScore;
    type IntoIter = std::vec::IntoIter<BoxScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.into_iter()
    }
}

impl<'a> IntoIterator for &'a BoxScoreList {
    type Item = &'a BoxScore;
    type IntoIter = slice::Iter<'a, BoxScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

impl fmt::Display for BoxScoreList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, score) in self.scores.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{score}")?;
        }
        Ok(())
    }
}
