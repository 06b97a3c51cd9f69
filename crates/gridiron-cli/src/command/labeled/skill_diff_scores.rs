use std::path::PathBuf;

use clap::Args;
use gridiron_boxscore::{labeled::LabeledBoxScore, skill::SkillDiffScore};

use crate::util::{self, DataDir, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct SkillDiffScoresArg {
    /// Labeled box scores to read (default: `processed/training.json`)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file (default: `preprocessed/skill_diff_scores.json`)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub(crate) fn run(arg: &SkillDiffScoresArg, data: &DataDir) -> anyhow::Result<()> {
    let input = arg
        .input
        .clone()
        .unwrap_or_else(|| data.processed_file("training"));
    let games: Vec<LabeledBoxScore> = util::read_json_file("labeled box score", &input)?;

    let rows = skill_diff_rows(&games);
    tracing::info!(games = games.len(), rows = rows.len(), "extracted skill differentials");

    let output = arg
        .file
        .clone()
        .unwrap_or_else(|| data.preprocessed_file("skill_diff_scores"));
    Output::save_json(&rows, Some(output.clone()))?;
    tracing::info!("wrote {}", output.display());
    Ok(())
}

fn skill_diff_rows(games: &[LabeledBoxScore]) -> Vec<SkillDiffScore> {
    games
        .iter()
        .flat_map(LabeledBoxScore::skill_diff_scores)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gridiron_boxscore::{box_score::BoxScore, labeled::SkillTiers};

    use super::*;

    #[test]
    fn test_two_rows_per_game() {
        let game = LabeledBoxScore::new(
            BoxScore::new("d", "H", 24, "A", 17),
            SkillTiers {
                home_offense: 5,
                home_defense: 3,
                away_offense: 2,
                away_defense: 1,
            },
        );
        let rows = skill_diff_rows(&[game.clone(), game]);
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            SkillDiffScore {
                offense_defense_differential: 4,
                score: 24,
                is_home: true,
            }
        );
        assert_eq!(
            rows[1],
            SkillDiffScore {
                offense_defense_differential: -1,
                score: 17,
                is_home: false,
            }
        );
    }

    #[test]
    fn test_default_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let data = DataDir::new(tmp.path().to_path_buf());
        fs::create_dir_all(tmp.path().join("processed")).unwrap();
        fs::write(data.processed_file("training"), "[]").unwrap();

        run(&SkillDiffScoresArg { input: None, file: None }, &data).unwrap();

        let rows: Vec<SkillDiffScore> =
            util::read_json_file("test", data.preprocessed_file("skill_diff_scores")).unwrap();
        assert!(rows.is_empty());
    }
}
