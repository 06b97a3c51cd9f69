//! Per-team descriptive statistics
//!
//! A [`BoxScoreSummary`] holds the distribution of points one team scored
//! (offense) and allowed (defense) over a set of games. Summaries for many
//! teams and years are collected in a [`BoxScoreSummaryList`].
//!
//! # Serialization
//!
//! ```json
//! {
//!   "team": "2023 Detroit",
//!   "offense": {"count": 3, "mean": 21.67, "std": 2.08, "min": 20.0,
//!               "25%": 20.5, "50%": 21.0, "75%": 22.5, "max": 24.0},
//!   "defense": {"count": 3, ...}
//! }
//! ```
//!
//! Undefined statistics (everything but `count` for a team without games,
//! `std` for a single game) are written as `null`.

use std::{fmt, slice};

use gridiron_stats::descriptive::DescriptiveStats;
use serde::{Deserialize, Serialize};

use crate::box_score::TeamScore;

/// Descriptive statistics of one side (offense or defense) of a team's games.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub lower_quartile: Option<f64>,
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    #[serde(rename = "75%")]
    pub upper_quartile: Option<f64>,
    pub max: Option<f64>,
}

impl ScoreStats {
    /// Computes the statistics of a sequence of points.
    #[must_use]
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        DescriptiveStats::from_integers(points).into()
    }

    fn fields(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.lower_quartile),
            ("50%", self.median),
            ("75%", self.upper_quartile),
            ("max", self.max),
        ]
    }
}

impl From<DescriptiveStats> for ScoreStats {
    fn from(stats: DescriptiveStats) -> Self {
        Self {
            count: stats.count,
            mean: stats.mean,
            std: stats.std_dev,
            min: stats.min,
            lower_quartile: stats.lower_quartile,
            median: stats.median,
            upper_quartile: stats.upper_quartile,
            max: stats.max,
        }
    }
}

impl fmt::Display for ScoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6} {:>10}", "count", self.count)?;
        for (name, value) in self.fields() {
            match value {
                Some(value) => write!(f, "\n{name:<6} {value:>10.3}")?,
                None => write!(f, "\n{name:<6} {:>10}", "NaN")?,
            }
        }
        Ok(())
    }
}

/// Offense and defense statistics of one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxScoreSummary {
    /// Team label, `"<year> <team>"` for season summaries.
    pub team: String,
    /// Distribution of points scored.
    pub offense: ScoreStats,
    /// Distribution of points allowed.
    pub defense: ScoreStats,
}

impl BoxScoreSummary {
    #[must_use]
    pub fn new(team: impl Into<String>, offense: ScoreStats, defense: ScoreStats) -> Self {
        Self {
            team: team.into(),
            offense,
            defense,
        }
    }

    /// Summarizes a team's per-game points.
    #[must_use]
    pub fn from_team_scores(team: impl Into<String>, scores: &[TeamScore]) -> Self {
        Self::new(
            team,
            ScoreStats::from_points(scores.iter().map(|s| s.offense)),
            ScoreStats::from_points(scores.iter().map(|s| s.defense)),
        )
    }

    /// Prefixes the team label with `year`.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.team = format!("{year} {}", self.team);
        self
    }
}

impl fmt::Display for BoxScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nOffense:\n{}\n\nDefense:\n{}",
            self.team, self.offense, self.defense
        )
    }
}

/// One side of a team summary flattened into a single row.
///
/// This is the record format of the per-side tables (`offense.json`,
/// `defense.json`) that tier clustering consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideSummaryRow {
    pub team: String,
    #[serde(flatten)]
    pub stats: ScoreStats,
}

/// An ordered collection of team summaries.
///
/// Appending never sorts or removes duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxScoreSummaryList {
    summaries: Vec<BoxScoreSummary>,
}

impl BoxScoreSummaryList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_summary(&mut self, summary: BoxScoreSummary) {
        self.summaries.push(summary);
    }

    /// Appends every summary of `other`, keeping its order.
    pub fn add_summaries(&mut self, other: BoxScoreSummaryList) {
        self.summaries.extend(other.summaries);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, BoxScoreSummary> {
        self.summaries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[BoxScoreSummary] {
        &self.summaries
    }

    /// The offense side of every summary.
    #[must_use]
    pub fn offense_rows(&self) -> Vec<SideSummaryRow> {
        self.side_rows(|s| s.offense)
    }

    /// The defense side of every summary.
    #[must_use]
    pub fn defense_rows(&self) -> Vec<SideSummaryRow> {
        self.side_rows(|s| s.defense)
    }

    fn side_rows<F>(&self, side: F) -> Vec<SideSummaryRow>
    where
        F: Fn(&BoxScoreSummary) -> ScoreStats,
    {
        self.summaries
            .iter()
            .map(|summary| SideSummaryRow {
                team: summary.team.clone(),
                stats: side(summary),
            })
            .collect()
    }
}

impl FromIterator<BoxScoreSummary> for BoxScoreSummaryList {
    fn from_iter<I: IntoIterator<Item = BoxScoreSummary>>(iter: I) -> Self {
        Self {
            summaries: iter.into_iter().collect(),
        }
    }
}

impl Extend<BoxScoreSummary> for BoxScoreSummaryList {
    fn extend<I: IntoIterator<Item = BoxScoreSummary>>(&mut self, iter: I) {
        self.summaries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a BoxScoreSummaryList {
    type Item = &'a BoxScoreSummary;
    type IntoIter = slice::Iter<'a, BoxScoreSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.iter()
    }
}

impl fmt::Display for BoxScoreSummaryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, summary) in self.summaries.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn summary(team: &str) -> BoxScoreSummary {
        BoxScoreSummary::from_team_scores(
            team,
            &[
                TeamScore {
                    offense: 10,
                    defense: 7,
                },
                TeamScore {
                    offense: 20,
                    defense: 7,
                },
                TeamScore {
                    offense: 30,
                    defense: 7,
                },
            ],
        )
    }

    fn teams(list: &BoxScoreSummaryList) -> Vec<&str> {
        list.iter().map(|s| s.team.as_str()).collect()
    }

    #[test]
    fn test_offense_and_defense_are_independent() {
        let summary = summary("A");
        assert_eq!(summary.offense.mean, Some(20.0));
        assert_eq!(summary.offense.std, Some(10.0));
        assert_eq!(summary.defense.mean, Some(7.0));
        assert_eq!(summary.defense.std, Some(0.0));
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(summary("A").with_year(2023)).unwrap();
        assert_eq!(
            value,
            json!({
                "team": "2023 A",
                "offense": {
                    "count": 3, "mean": 20.0, "std": 10.0, "min": 10.0,
                    "25%": 15.0, "50%": 20.0, "75%": 25.0, "max": 30.0,
                },
                "defense": {
                    "count": 3, "mean": 7.0, "std": 0.0, "min": 7.0,
                    "25%": 7.0, "50%": 7.0, "75%": 7.0, "max": 7.0,
                },
            })
        );
    }

    #[test]
    fn test_undefined_statistics_serialize_as_null() {
        let empty = BoxScoreSummary::from_team_scores("Z", &[]);
        let value = serde_json::to_value(&empty).unwrap();
        assert_eq!(value["offense"]["count"], json!(0));
        for key in ["mean", "std", "min", "25%", "50%", "75%", "max"] {
            assert_eq!(value["offense"][key], json!(null), "{key}");
            assert_eq!(value["defense"][key], json!(null), "{key}");
        }
        let back: BoxScoreSummary = serde_json::from_value(value).unwrap();
        assert_eq!(back, empty);
    }

    #[test]
    fn test_display_has_both_blocks() {
        let text = summary("A").to_string();
        assert!(text.starts_with("A\nOffense:\ncount"));
        assert!(text.contains("\n\nDefense:\ncount"));
        assert!(BoxScoreSummary::from_team_scores("Z", &[]).to_string().contains("NaN"));
    }

    #[test]
    fn test_add_summaries_preserves_order() {
        let mut left = BoxScoreSummaryList::new();
        left.add_summary(summary("s1"));
        let mut tail = BoxScoreSummaryList::new();
        tail.add_summary(summary("s2"));
        tail.add_summary(summary("s3"));
        left.add_summaries(tail);

        let mut right: BoxScoreSummaryList = [summary("s1"), summary("s2")].into_iter().collect();
        right.add_summaries([summary("s3")].into_iter().collect());

        assert_eq!(teams(&left), ["s1", "s2", "s3"]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut list = BoxScoreSummaryList::new();
        list.add_summary(summary("A"));
        list.add_summary(summary("A"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_side_rows() {
        let list: BoxScoreSummaryList = [summary("A"), summary("B")].into_iter().collect();
        let offense = list.offense_rows();
        assert_eq!(offense.len(), 2);
        assert_eq!(offense[1].team, "B");
        assert_eq!(offense[1].stats.max, Some(30.0));

        let row = serde_json::to_value(&list.defense_rows()[0]).unwrap();
        assert_eq!(row["team"], json!("A"));
        assert_eq!(row["50%"], json!(7.0));
    }
}
