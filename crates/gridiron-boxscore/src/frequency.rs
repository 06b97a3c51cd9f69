//! How often scores and ties occur

use std::collections::BTreeMap;

use gridiron_stats::frequency::FrequencyTable;
use serde::{Deserialize, Serialize};

use crate::{box_score::BoxScore, labeled::LabeledBoxScore};

/// How often one points value was scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueFrequency {
    pub value: u32,
    pub count: usize,
    /// Share of all team-games that ended with this many points.
    pub proportion: f64,
}

/// Frequency of every final points value, counting both teams of every game.
///
/// Rows are sorted by points value.
#[must_use]
pub fn score_frequency<'a, I>(games: I) -> Vec<ValueFrequency>
where
    I: IntoIterator<Item = &'a BoxScore>,
{
    let table = games
        .into_iter()
        .flat_map(|game| [game.home_score(), game.away_score()])
        .collect::<FrequencyTable<u32>>();
    table
        .iter()
        .map(|(value, count)| ValueFrequency {
            value,
            count,
            proportion: table.proportion(value).unwrap_or_default(),
        })
        .collect()
}

/// Share of games that ended in a tie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieFrequency {
    /// What the games have in common: a year, `all`, or a skill differential.
    pub label: String,
    pub games: usize,
    pub ties: usize,
    /// `ties / games`; `None` without games.
    pub frequency: Option<f64>,
}

impl TieFrequency {
    /// Counts the ties among `games`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_games<'a, I>(label: impl Into<String>, games: I) -> Self
    where
        I: IntoIterator<Item = &'a BoxScore>,
    {
        let (count, ties) = games
            .into_iter()
            .fold((0, 0), |(count, ties), game| {
                (count + 1, ties + usize::from(game.is_tie()))
            });
        Self {
            label: label.into(),
            games: count,
            ties,
            frequency: (count > 0).then(|| ties as f64 / count as f64),
        }
    }
}

/// Tie frequency grouped by overall skill differential between the teams.
///
/// Groups are sorted by differential and labelled with a signed number
/// (`-2`, `0`, `+3`).
#[must_use]
pub fn tie_frequency_by_skill(games: &[LabeledBoxScore]) -> Vec<TieFrequency> {
    let mut groups = BTreeMap::<i64, Vec<&BoxScore>>::new();
    for game in games {
        groups
            .entry(game.overall_skill_differential())
            .or_default()
            .push(game.box_score());
    }
    groups
        .into_iter()
        .map(|(differential, games)| {
            let label = if differential > 0 {
                format!("+{differential}")
            } else {
                differential.to_string()
            };
            TieFrequency::from_games(label, games)
        })
        .collect()
}
