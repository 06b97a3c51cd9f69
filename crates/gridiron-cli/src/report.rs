//! Rendering command results as text, JSON or tables

use std::path::PathBuf;

use clap::Args;
use gridiron_boxscore::{
    frequency::{TieFrequency, ValueFrequency},
    list::BoxScoreList,
    skill::{SkillDiffScore, SkillDiffSummary},
    summary::{BoxScoreSummaryList, ScoreStats, SideSummaryRow},
};
use serde::Serialize;

use crate::{
    table::{Table, stat_cell},
    util::Output,
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Default,
    /// Pretty-printed JSON
    Json,
    /// Fixed-width table
    Table,
}

#[derive(Debug, Clone, Args)]
pub struct OutputArg {
    /// Output format: default, json or table
    #[arg(short, long, default_value = "default")]
    pub output: OutputFormat,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl OutputArg {
    pub fn write<R>(&self, report: &R) -> anyhow::Result<()>
    where
        R: Report + ?Sized,
    {
        let mut output = Output::from_output_path(self.file.clone())?;
        match self.output {
            OutputFormat::Default => output.write_text(&report.to_text())?,
            OutputFormat::Json => output.write_json(report)?,
            OutputFormat::Table => output.write_text(&report.to_table().to_string())?,
        }
        if let Output::File { path, .. } = &output {
            tracing::info!("wrote {}", path.display());
        }
        Ok(())
    }
}

/// A command result that can be written in every [`OutputFormat`].
pub trait Report: Serialize {
    fn to_table(&self) -> Table;

    fn to_text(&self) -> String {
        self.to_table().to_string()
    }
}

const STAT_HEADERS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

fn stat_cells(stats: &ScoreStats) -> impl Iterator<Item = String> {
    [stats.count.to_string()].into_iter().chain(
        [
            stats.mean,
            stats.std,
            stats.min,
            stats.lower_quartile,
            stats.median,
            stats.upper_quartile,
            stats.max,
        ]
        .map(stat_cell),
    )
}

impl Report for BoxScoreList {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["date", "home_team", "home_score", "away_team", "away_score"]);
        for score in self {
            table.push_row([
                score.date().to_owned(),
                score.home_team().to_owned(),
                score.home_score().to_string(),
                score.away_team().to_owned(),
                score.away_score().to_string(),
            ]);
        }
        table
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Report for BoxScoreSummaryList {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["team", "side"].into_iter().chain(STAT_HEADERS));
        for summary in self {
            for (side, stats) in [("offense", &summary.offense), ("defense", &summary.defense)] {
                table.push_row([summary.team.clone(), side.to_owned()].into_iter().chain(stat_cells(stats)));
            }
        }
        table
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Report for [SideSummaryRow] {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["team"].into_iter().chain(STAT_HEADERS));
        for row in self {
            table.push_row([row.team.clone()].into_iter().chain(stat_cells(&row.stats)));
        }
        table
    }
}

impl Report for [ValueFrequency] {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["points", "count", "proportion"]);
        for row in self {
            table.push_row([
                row.value.to_string(),
                row.count.to_string(),
                format!("{:.4}", row.proportion),
            ]);
        }
        table
    }
}

impl Report for [TieFrequency] {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["label", "games", "ties", "frequency"]);
        for row in self {
            table.push_row([
                row.label.clone(),
                row.games.to_string(),
                row.ties.to_string(),
                stat_cell(row.frequency),
            ]);
        }
        table
    }
}

impl Report for [SkillDiffScore] {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["differential", "score", "venue"]);
        for row in self {
            table.push_row([
                row.offense_defense_differential.to_string(),
                row.score.to_string(),
                if row.is_home { "home" } else { "away" }.to_owned(),
            ]);
        }
        table
    }
}

impl Report for [SkillDiffSummary] {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["norm_diff", "count", "mean_score", "std_score"]);
        for row in self {
            table.push_row([
                format!("{:.3}", row.norm_diff),
                row.count.to_string(),
                stat_cell(row.mean_score),
                stat_cell(row.std_score),
            ]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use gridiron_boxscore::{box_score::BoxScore, summary::BoxScoreSummary};

    use super::*;

    #[test]
    fn test_output_format_parses_lowercase() {
        assert_eq!("default".parse::<OutputFormat>().unwrap(), OutputFormat::Default);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_box_score_table() {
        let list = BoxScoreList::new(vec![BoxScore::new("2023-01-01", "A", 20, "B", 10)]);
        let table = list.to_table().to_string();
        let last = table.lines().last().unwrap();
        assert!(last.starts_with("2023-01-01"));
        assert!(last.ends_with("10"));
        assert_eq!(list.to_text(), "[2023-01-01] A 20 - B 10");
    }

    #[test]
    fn test_summary_table_has_two_rows_per_team() {
        let list: BoxScoreSummaryList = [
            BoxScoreSummary::from_team_scores("2023 A", &[]),
            BoxScoreSummary::from_team_scores("2023 B", &[]),
        ]
        .into_iter()
        .collect();
        let table = list.to_table().to_string();
        assert_eq!(table.lines().count(), 2 + 4);
        assert!(table.contains("NaN"));
    }

    #[test]
    fn test_side_rows_default_to_table() {
        let list: BoxScoreSummaryList = [BoxScoreSummary::from_team_scores("A", &[])].into_iter().collect();
        let rows = list.offense_rows();
        assert_eq!(rows.to_text(), rows.to_table().to_string());
    }
}
