//! Scoring by offense/defense skill differential
//!
//! Each side of a labeled game pairs an offense tier with the opposing
//! defense tier. The difference between the two is the skill differential;
//! with tiers `1..=5` it ranges over `-4..=4`, and is normalized onto
//! `0.0..=1.0` for modelling.

use std::collections::BTreeMap;

use gridiron_stats::descriptive::DescriptiveStats;
use serde::{Deserialize, Serialize};

/// Largest possible distance between two tiers.
pub const TIER_SPREAD: i32 = 4;

/// The points one offense scored against one defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillDiffScore {
    /// Offense tier minus the opposing defense tier.
    pub offense_defense_differential: i64,
    /// Points scored by the offense.
    pub score: u32,
    /// Whether the offense was the home team.
    pub is_home: bool,
}

/// Which offenses to include in a skill differential summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Venue {
    #[default]
    All,
    Home,
    Away,
}

impl Venue {
    fn includes(self, score: &SkillDiffScore) -> bool {
        match self {
            Venue::All => true,
            Venue::Home => score.is_home,
            Venue::Away => !score.is_home,
        }
    }
}

/// Scoring statistics for one skill differential.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillDiffSummary {
    /// The differential mapped onto `0.0..=1.0`.
    pub norm_diff: f64,
    pub count: usize,
    pub mean_score: Option<f64>,
    /// Sample standard deviation of the scores.
    pub std_score: Option<f64>,
}

/// Maps a differential in `-TIER_SPREAD..=TIER_SPREAD` onto `0.0..=1.0`.
///
/// Differentials outside that range map linearly outside `0.0..=1.0`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn normalize_differential(differential: i64) -> f64 {
    (differential as f64 + f64::from(TIER_SPREAD)) / f64::from(2 * TIER_SPREAD)
}

/// Groups scores by skill differential and summarizes each group.
///
/// Groups are returned in ascending differential order.
#[must_use]
pub fn summarize_skill_diffs(scores: &[SkillDiffScore], venue: Venue) -> Vec<SkillDiffSummary> {
    let mut groups = BTreeMap::<i64, Vec<u32>>::new();
    for score in scores.iter().filter(|s| venue.includes(s)) {
        groups
            .entry(score.offense_defense_differential)
            .or_default()
            .push(score.score);
    }
    groups
        .into_iter()
        .map(|(differential, points)| {
            let stats = DescriptiveStats::from_integers(points);
            SkillDiffSummary {
                norm_diff: normalize_differential(differential),
                count: stats.count,
                mean_score: stats.mean,
                std_score: stats.std_dev,
            }
        })
        .collect()
}
