//! Box scores labeled with team skill tiers
//!
//! Tier clustering assigns every team-season an offense tier and a defense
//! tier. A labeled box score carries the tiers of both teams next to the
//! game result, in one flat record:
//!
//! ```json
//! {
//!   "date": "2023-09-07",
//!   "away_team": "Detroit", "away_score": 21,
//!   "home_team": "Kansas City", "home_score": 20,
//!   "home_offense": 5, "home_defense": 4,
//!   "away_offense": 4, "away_defense": 2
//! }
//! ```
//!
//! Tiers are treated as opaque integers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    box_score::BoxScore,
    schema::{BOX_SCORE_FIELDS, JsonPath, ObjectReader, TIER_FIELDS, ValidationError},
    skill::SkillDiffScore,
};

/// Offense and defense tiers of both teams in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillTiers {
    pub home_offense: i32,
    pub home_defense: i32,
    pub away_offense: i32,
    pub away_defense: i32,
}

/// A box score together with the skill tiers of both teams.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct LabeledBoxScore {
    #[serde(flatten)]
    box_score: BoxScore,
    #[serde(flatten)]
    tiers: SkillTiers,
}

impl LabeledBoxScore {
    #[must_use]
    pub fn new(box_score: BoxScore, tiers: SkillTiers) -> Self {
        Self { box_score, tiers }
    }

    /// Validates a raw labeled record and builds a labeled box score from it.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::parse(value, &JsonPath::root())
    }

    pub(crate) fn parse(value: &Value, path: &JsonPath) -> Result<Self, ValidationError> {
        let mut allowed = Vec::with_capacity(BOX_SCORE_FIELDS.len() + TIER_FIELDS.len());
        allowed.extend(BOX_SCORE_FIELDS);
        allowed.extend(TIER_FIELDS);
        let reader = ObjectReader::new(value, path, &allowed)?;
        let box_score = BoxScore::read(&reader)?;
        let tiers = SkillTiers {
            home_offense: reader.tier("home_offense")?,
            home_defense: reader.tier("home_defense")?,
            away_offense: reader.tier("away_offense")?,
            away_defense: reader.tier("away_defense")?,
        };
        Ok(Self { box_score, tiers })
    }

    #[must_use]
    pub fn box_score(&self) -> &BoxScore {
        &self.box_score
    }

    #[must_use]
    pub fn tiers(&self) -> SkillTiers {
        self.tiers
    }

    /// One row per side of the game, pairing each offense with the
    /// opposing defense: home first, then away.
    #[must_use]
    pub fn skill_diff_scores(&self) -> [SkillDiffScore; 2] {
        let SkillTiers {
            home_offense,
            home_defense,
            away_offense,
            away_defense,
        } = self.tiers;
        [
            SkillDiffScore {
                offense_defense_differential: i64::from(home_offense) - i64::from(away_defense),
                score: self.box_score.home_score(),
                is_home: true,
            },
            SkillDiffScore {
                offense_defense_differential: i64::from(away_offense) - i64::from(home_defense),
                score: self.box_score.away_score(),
                is_home: false,
            },
        ]
    }

    /// Combined tiers of the home team minus combined tiers of the away team.
    #[must_use]
    pub fn overall_skill_differential(&self) -> i64 {
        let t = self.tiers;
        (i64::from(t.home_offense) + i64::from(t.home_defense))
            - (i64::from(t.away_offense) + i64::from(t.away_defense))
    }
}

impl TryFrom<Value> for LabeledBoxScore {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record() -> Value {
        json!({
            "date": "2023-09-07",
            "away_team": "Detroit",
            "away_score": 21,
            "home_team": "Kansas City",
            "home_score": 20,
            "home_offense": 5,
            "home_defense": 4,
            "away_offense": 4,
            "away_defense": 2,
        })
    }

    #[test]
    fn test_round_trip() {
        let labeled = LabeledBoxScore::from_value(&record()).unwrap();
        assert_eq!(labeled.box_score().home_team(), "Kansas City");
        assert_eq!(labeled.tiers().away_defense, 2);
        assert_eq!(serde_json::to_value(&labeled).unwrap(), record());

        let parsed: LabeledBoxScore = serde_json::from_value(record()).unwrap();
        assert_eq!(parsed, labeled);
    }

    #[test]
    fn test_skill_diff_scores() {
        let labeled = LabeledBoxScore::from_value(&record()).unwrap();
        let [home, away] = labeled.skill_diff_scores();
        assert_eq!(
            home,
            SkillDiffScore {
                offense_defense_differential: 3,
                score: 20,
                is_home: true
            }
        );
        assert_eq!(
            away,
            SkillDiffScore {
                offense_defense_differential: 0,
                score: 21,
                is_home: false
            }
        );
        assert_eq!(labeled.overall_skill_differential(), 3);
    }

    #[test]
    fn test_extreme_tiers_do_not_overflow() {
        let mut record = record();
        record["home_offense"] = json!(i32::MAX);
        record["home_defense"] = json!(i32::MAX);
        record["away_offense"] = json!(i32::MIN);
        record["away_defense"] = json!(-1);
        let labeled = LabeledBoxScore::from_value(&record).unwrap();

        let [home, away] = labeled.skill_diff_scores();
        assert_eq!(home.offense_defense_differential, i64::from(i32::MAX) + 1);
        assert_eq!(
            away.offense_defense_differential,
            i64::from(i32::MIN) - i64::from(i32::MAX)
        );
        assert_eq!(
            labeled.overall_skill_differential(),
            2 * i64::from(i32::MAX) - i64::from(i32::MIN) + 1
        );
    }

    #[test]
    fn test_tier_must_be_integer() {
        let mut record = record();
        record["home_offense"] = json!("5");
        let err = LabeledBoxScore::from_value(&record).unwrap_err();
        assert_eq!(err.path, "$.home_offense");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut record = record();
        record["cluster"] = json!(1);
        assert!(LabeledBoxScore::from_value(&record).is_err());
    }

    #[test]
    fn test_box_score_rules_apply() {
        let mut record = record();
        record["away_score"] = json!(-1);
        assert!(serde_json::from_value::<LabeledBoxScore>(record).is_err());
    }
}
