use clap::Args;
use gridiron_boxscore::{
    labeled::LabeledBoxScore,
    split::{DatasetSplit, split_dataset},
};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::util::{DataDir, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct AggregateArg {
    /// Seed for the random split (default: random)
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &AggregateArg, data: &DataDir) -> anyhow::Result<()> {
    let mut games = Vec::<LabeledBoxScore>::new();
    for year in data.raw_years()? {
        games.extend(data.load_labeled_year(year)?);
    }

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    tracing::debug!(seed, "splitting labeled box scores");
    let split = split_dataset(games, &mut Pcg32::seed_from_u64(seed));
    tracing::info!(
        training = split.training.len(),
        validation = split.validation.len(),
        testing = split.testing.len(),
        "split {} labeled box scores",
        split.len()
    );

    save_split(data, &split)
}

fn save_split(data: &DataDir, split: &DatasetSplit<LabeledBoxScore>) -> anyhow::Result<()> {
    for (name, games) in [
        ("training", &split.training),
        ("validation", &split.validation),
        ("testing", &split.testing),
    ] {
        let path = data.processed_file(name);
        Output::save_json(games, Some(path.clone()))?;
        tracing::info!("wrote {}", path.display());
    }
    Ok(())
}
