//! Box score schema validation
//!
//! A box score is a flat JSON object with exactly these properties:
//!
//! ```json
//! {
//!   "date": "2023-09-07",
//!   "away_team": "Detroit",
//!   "away_score": 21,
//!   "home_team": "Kansas City",
//!   "home_score": 20
//! }
//! ```
//!
//! All five properties are required. `date` and the team names may be any
//! string (dates are not parsed). Scores must be non-negative integers that
//! fit in a `u32`; a float such as `20.0` is not an integer. A box score list
//! is a JSON array of such objects.
//!
//! Labeled box scores additionally carry the four integer skill tiers
//! `home_offense`, `home_defense`, `away_offense` and `away_defense`.
//!
//! Validation reports the first violation found, located by a JSON path such
//! as `$[3].home_score`.

use std::fmt;

use serde_json::{Map, Value};

use crate::{box_score::BoxScore, labeled::LabeledBoxScore};

/// Property names of a box score, in canonical order.
pub const BOX_SCORE_FIELDS: [&str; 5] = ["date", "away_team", "away_score", "home_team", "home_score"];

/// Property names of the skill tiers carried by a labeled box score.
pub const TIER_FIELDS: [&str; 4] = ["home_offense", "home_defense", "away_offense", "away_defense"];

/// A schema violation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid box score at {path}: {message}")]
pub struct ValidationError {
    /// JSON path of the offending value (`$` is the document root).
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(path: &JsonPath, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Location of a value inside a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JsonPath(String);

impl JsonPath {
    pub(crate) fn root() -> Self {
        Self("$".to_owned())
    }

    pub(crate) fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    pub(crate) fn field(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checked read access to the properties of a JSON object.
///
/// Construction fails if the value is not an object or carries a property
/// outside `allowed`.
#[derive(Debug)]
pub(crate) struct ObjectReader<'a> {
    path: &'a JsonPath,
    object: &'a Map<String, Value>,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(
        value: &'a Value,
        path: &'a JsonPath,
        allowed: &[&str],
    ) -> Result<Self, ValidationError> {
        let Value::Object(object) = value else {
            return Err(ValidationError::new(
                path,
                format!("{value} is not of type 'object'"),
            ));
        };
        if let Some(extra) = object.keys().find(|key| !allowed.contains(&key.as_str())) {
            return Err(ValidationError::new(
                path,
                format!("additional properties are not allowed ('{extra}' was unexpected)"),
            ));
        }
        Ok(Self { path, object })
    }

    fn required(&self, name: &str) -> Result<&'a Value, ValidationError> {
        self.object.get(name).ok_or_else(|| {
            ValidationError::new(self.path, format!("'{name}' is a required property"))
        })
    }

    /// Reads a required string property.
    pub(crate) fn text(&self, name: &str) -> Result<String, ValidationError> {
        match self.required(name)? {
            Value::String(text) => Ok(text.clone()),
            other => Err(ValidationError::new(
                &self.path.field(name),
                format!("{other} is not of type 'string'"),
            )),
        }
    }

    /// Reads a required non-negative integer property.
    pub(crate) fn score(&self, name: &str) -> Result<u32, ValidationError> {
        let path = self.path.field(name);
        let value = self.integer(name)?;
        if value < 0 {
            return Err(ValidationError::new(
                &path,
                format!("{value} is less than the minimum of 0"),
            ));
        }
        u32::try_from(value).map_err(|_| {
            ValidationError::new(&path, format!("{value} is greater than the maximum of {}", u32::MAX))
        })
    }

    /// Reads a required integer property that must fit in an `i32`.
    pub(crate) fn tier(&self, name: &str) -> Result<i32, ValidationError> {
        let value = self.integer(name)?;
        i32::try_from(value).map_err(|_| {
            ValidationError::new(&self.path.field(name), format!("{value} is out of range"))
        })
    }

    fn integer(&self, name: &str) -> Result<i64, ValidationError> {
        let value = self.required(name)?;
        let not_integer =
            || ValidationError::new(&self.path.field(name), format!("{value} is not of type 'integer'"));
        match value {
            Value::Number(number) => match (number.as_i64(), number.as_u64()) {
                (Some(n), _) => Ok(n),
                // Larger than i64::MAX: still an integer, reject as out of range.
                (None, Some(_)) => Ok(i64::MAX),
                (None, None) => Err(not_integer()),
            },
            _ => Err(not_integer()),
        }
    }
}

/// Validates a single box score object.
///
/// # Examples
///
/// ```
/// use gridiron_boxscore::schema::validate_box_score;
/// use serde_json::json;
///
/// let valid = json!({
///     "date": "2023-01-01",
///     "home_team": "A", "home_score": 20,
///     "away_team": "B", "away_score": 10,
/// });
/// assert!(validate_box_score(&valid).is_ok());
///
/// let extra = json!({
///     "date": "2023-01-01",
///     "home_team": "A", "home_score": 20,
///     "away_team": "B", "away_score": 10,
///     "overtime": true,
/// });
/// assert!(validate_box_score(&extra).is_err());
/// ```
pub fn validate_box_score(candidate: &Value) -> Result<(), ValidationError> {
    BoxScore::parse(candidate, &JsonPath::root()).map(drop)
}

/// Validates a box score list: a JSON array of box score objects.
pub fn validate_box_score_list(candidate: &Value) -> Result<(), ValidationError> {
    parse_array(candidate, &JsonPath::root(), BoxScore::parse).map(drop)
}

/// Validates a single labeled box score object.
pub fn validate_labeled_box_score(candidate: &Value) -> Result<(), ValidationError> {
    LabeledBoxScore::parse(candidate, &JsonPath::root()).map(drop)
}

/// Parses every element of a JSON array, stopping at the first violation.
pub(crate) fn parse_array<T, F>(
    candidate: &Value,
    path: &JsonPath,
    mut parse: F,
) -> Result<Vec<T>, ValidationError>
where
    F: FnMut(&Value, &JsonPath) -> Result<T, ValidationError>,
{
    let Value::Array(items) = candidate else {
        return Err(ValidationError::new(
            path,
            format!("{candidate} is not of type 'array'"),
        ));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse(item, &path.index(i)))
        .collect()
}
