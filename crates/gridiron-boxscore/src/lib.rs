//! Validated box score model and per-team aggregation
//!
//! This crate turns raw per-year JSON game results into per-team descriptive
//! statistics of points scored and allowed.
//!
//! # Overview
//!
//! ```text
//! raw JSON ──validate──▶ BoxScoreList ──to_season──▶ BoxScoreSeason
//!                                                         │ summarize
//!                                                         ▼
//!                         BoxScoreSummaryList ◀── BoxScoreSummary (per team)
//! ```
//!
//! 1. **Validate** ([`schema`]): raw records must match the box score schema
//! 2. **Collect** ([`list::BoxScoreList`]): an ordered list of valid games
//! 3. **Group** ([`season::BoxScoreSeason`]): one year of games keyed by team
//! 4. **Summarize** ([`summary::BoxScoreSummary`]): offense/defense statistics
//!    per team, collected across teams and years in
//!    [`summary::BoxScoreSummaryList`]
//!
//! Games labeled with team skill tiers ([`labeled`]) feed the skill
//! differential ([`skill`]) and tie frequency ([`frequency`]) analyses, and can
//! be partitioned into training data sets ([`split`]).
//!
//! This crate performs no file I/O; callers parse JSON and hand over
//! [`serde_json::Value`]s or deserialize the model types directly (which
//! validates them).
//!
//! # Examples
//!
//! ```
//! use gridiron_boxscore::list::BoxScoreList;
//! use serde_json::json;
//!
//! let list: BoxScoreList = serde_json::from_value(json!([
//!     {"date": "2023-09-07", "home_team": "Kansas City", "home_score": 20,
//!      "away_team": "Detroit", "away_score": 21},
//!     {"date": "2023-09-17", "home_team": "Detroit", "home_score": 20,
//!      "away_team": "Seattle", "away_score": 37},
//! ]))?;
//!
//! let summaries = list.to_season(2023).summarize();
//! let detroit = &summaries.as_slice()[0];
//! assert_eq!(detroit.team, "2023 Detroit");
//! assert_eq!(detroit.offense.count, 2);
//! assert_eq!(detroit.offense.mean, Some(20.5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod box_score;
pub mod frequency;
pub mod labeled;
pub mod list;
pub mod schema;
pub mod season;
pub mod skill;
pub mod split;
pub mod summary;
