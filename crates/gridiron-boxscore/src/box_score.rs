use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{BOX_SCORE_FIELDS, JsonPath, ObjectReader, ValidationError};

/// The final score of a single game.
///
/// A `BoxScore` can only be obtained from a record that satisfies the box
/// score schema (see [`schema`](crate::schema)); its fields are typed and
/// immutable after construction.
///
/// Serializing a `BoxScore` yields the canonical record it was built from,
/// and deserializing one runs the schema validation.
///
/// # Examples
///
/// ```
/// use gridiron_boxscore::box_score::BoxScore;
/// use serde_json::json;
///
/// let record = json!({
///     "date": "2023-01-01",
///     "home_team": "A", "home_score": 20,
///     "away_team": "B", "away_score": 10,
/// });
/// let score = BoxScore::from_value(&record)?;
/// assert_eq!(score.to_string(), "[2023-01-01] A 20 - B 10");
/// assert_eq!(serde_json::to_value(&score)?, record);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct BoxScore {
    date: String,
    away_team: String,
    away_score: u32,
    home_team: String,
    home_score: u32,
}

impl BoxScore {
    /// Creates a box score from already typed values.
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        home_team: impl Into<String>,
        home_score: u32,
        away_team: impl Into<String>,
        away_score: u32,
    ) -> Self {
        Self {
            date: date.into(),
            away_team: away_team.into(),
            away_score,
            home_team: home_team.into(),
            home_score,
        }
    }

    /// Validates a raw record and builds a box score from it.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::parse(value, &JsonPath::root())
    }

    pub(crate) fn parse(value: &Value, path: &JsonPath) -> Result<Self, ValidationError> {
        let reader = ObjectReader::new(value, path, &BOX_SCORE_FIELDS)?;
        Self::read(&reader)
    }

    pub(crate) fn read(reader: &ObjectReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            date: reader.text("date")?,
            away_team: reader.text("away_team")?,
            away_score: reader.score("away_score")?,
            home_team: reader.text("home_team")?,
            home_score: reader.score("home_score")?,
        })
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[must_use]
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    #[must_use]
    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    /// Returns `true` if `team` played in this game, home or away.
    #[must_use]
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// Returns `true` if both teams finished with the same score.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.home_score == self.away_score
    }

    /// The game from `team`'s point of view.
    ///
    /// Returns `None` if `team` did not play. When a team is listed on both
    /// sides, the home perspective is used.
    #[must_use]
    pub fn team_score(&self, team: &str) -> Option<TeamScore> {
        if self.home_team == team {
            Some(TeamScore {
                offense: self.home_score,
                defense: self.away_score,
            })
        } else if self.away_team == team {
            Some(TeamScore {
                offense: self.away_score,
                defense: self.home_score,
            })
        } else {
            None
        }
    }

    /// The canonical JSON record of this game.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "date": self.date,
            "away_team": self.away_team,
            "away_score": self.away_score,
            "home_team": self.home_team,
            "home_score": self.home_score,
        })
    }
}

impl TryFrom<Value> for BoxScore {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl fmt::Display for BoxScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} - {} {}",
            self.date, self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

/// Points scored and allowed by one team in one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamScore {
    /// Points the team scored.
    pub offense: u32,
    /// Points the team allowed.
    pub defense: u32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record() -> Value {
        json!({
            "date": "2023-01-01",
            "home_team": "A",
            "home_score": 20,
            "away_team": "B",
            "away_score": 10,
        })
    }

    #[test]
    fn test_accessors() {
        let score = BoxScore::from_value(&record()).unwrap();
        assert_eq!(score.date(), "2023-01-01");
        assert_eq!(score.home_team(), "A");
        assert_eq!(score.home_score(), 20);
        assert_eq!(score.away_team(), "B");
        assert_eq!(score.away_score(), 10);
        assert_eq!(score, BoxScore::new("2023-01-01", "A", 20, "B", 10));
    }

    #[test]
    fn test_serialization_round_trip() {
        let records = [
            record(),
            json!({"date": "", "home_team": "", "home_score": 0, "away_team": "", "away_score": 0}),
            json!({"date": "Sat", "home_team": "X", "home_score": 99, "away_team": "X", "away_score": 99}),
        ];
        for record in records {
            let score = BoxScore::from_value(&record).unwrap();
            assert_eq!(serde_json::to_value(&score).unwrap(), record);
            assert_eq!(score.to_value(), record);
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let score: BoxScore = serde_json::from_value(record()).unwrap();
        assert_eq!(score.home_score(), 20);

        let mut invalid = record();
        invalid["overtime"] = json!(true);
        let err = serde_json::from_value::<BoxScore>(invalid).unwrap_err();
        assert!(err.to_string().contains("overtime"));
    }

    #[test]
    fn test_invalid_record_is_not_constructed() {
        let mut invalid = record();
        invalid.as_object_mut().unwrap().remove("home_score");
        assert!(BoxScore::from_value(&invalid).is_err());
    }

    #[test]
    fn test_display() {
        let score = BoxScore::new("2022-11-24", "Dallas", 28, "New York", 20);
        assert_eq!(score.to_string(), "[2022-11-24] Dallas 28 - New York 20");
    }

    #[test]
    fn test_team_score_perspective() {
        let score = BoxScore::from_value(&record()).unwrap();
        assert_eq!(
            score.team_score("A"),
            Some(TeamScore {
                offense: 20,
                defense: 10
            })
        );
        assert_eq!(
            score.team_score("B"),
            Some(TeamScore {
                offense: 10,
                defense: 20
            })
        );
        assert_eq!(score.team_score("C"), None);
        assert!(score.involves("B"));
        assert!(!score.involves("C"));
        assert!(!score.is_tie());
    }
}
