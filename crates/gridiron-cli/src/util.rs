use std::{
    fs::{self, File},
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use gridiron_boxscore::{labeled::LabeledBoxScore, list::BoxScoreList};
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over the `-v` count when it is set.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    /// Creates (or truncates) `path`, creating missing parent directories.
    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        self.finish_line()
    }

    pub fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", self.display_path()))?;
        self.finish_line()
    }

    fn finish_line(&mut self) -> anyhow::Result<()> {
        writeln!(&mut *self)
            .with_context(|| format!("Failed to write newline to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Layout of the data directory.
///
/// ```text
/// <root>/
/// ├─ raw/<year>.json                 box score lists, one per year
/// ├─ labeled/<year>.json             box scores with skill tiers
/// ├─ processed/<split>.json          training / validation / testing
/// └─ preprocessed/<name>.json        derived tables
/// ```
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn raw_file(&self, year: i32) -> PathBuf {
        self.root.join("raw").join(format!("{year}.json"))
    }

    pub fn labeled_file(&self, year: i32) -> PathBuf {
        self.root.join("labeled").join(format!("{year}.json"))
    }

    pub fn processed_file(&self, name: &str) -> PathBuf {
        self.root.join("processed").join(format!("{name}.json"))
    }

    pub fn preprocessed_file(&self, name: &str) -> PathBuf {
        self.root.join("preprocessed").join(format!("{name}.json"))
    }

    /// Years with a raw box score file, ascending.
    ///
    /// Files whose stem is not a year are skipped with a warning.
    pub fn raw_years(&self) -> anyhow::Result<Vec<i32>> {
        let dir = self.root.join("raw");
        let entries = fs::read_dir(&dir)
            .with_context(|| format!("Failed to read raw data directory: {}", dir.display()))?;

        let mut years = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to read entry of {}", dir.display()))?
                .path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()).map(str::parse::<i32>) {
                Some(Ok(year)) => years.push(year),
                _ => tracing::warn!("skipping {}: file name is not a year", path.display()),
            }
        }
        years.sort_unstable();
        Ok(years)
    }

    /// Years to process: `year` if given, every raw year otherwise.
    pub fn years_or_all(&self, year: Option<i32>) -> anyhow::Result<Vec<i32>> {
        match year {
            Some(year) => Ok(vec![year]),
            None => self.raw_years(),
        }
    }

    pub fn load_raw_year(&self, year: i32) -> anyhow::Result<BoxScoreList> {
        let scores: BoxScoreList = read_json_file("box score", self.raw_file(year))?;
        tracing::debug!(year, games = scores.len(), "loaded raw box scores");
        Ok(scores)
    }

    pub fn load_labeled_year(&self, year: i32) -> anyhow::Result<Vec<LabeledBoxScore>> {
        let scores: Vec<LabeledBoxScore> =
            read_json_file("labeled box score", self.labeled_file(year))?;
        tracing::debug!(year, games = scores.len(), "loaded labeled box scores");
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME: &str = r#"{"date": "2023-01-01", "home_team": "A", "home_score": 20, "away_team": "B", "away_score": 10}"#;

    fn data_dir() -> (tempfile::TempDir, DataDir) {
        let tmp = tempfile::tempdir().unwrap();
        let data = DataDir::new(tmp.path().to_path_buf());
        fs::create_dir_all(tmp.path().join("raw")).unwrap();
        (tmp, data)
    }

    #[test]
    fn test_raw_years_are_sorted_and_filtered() {
        let (_tmp, data) = data_dir();
        for name in ["2021.json", "1999.json", "notes.txt", "summary.json"] {
            fs::write(data.root.join("raw").join(name), "[]").unwrap();
        }
        assert_eq!(data.raw_years().unwrap(), [1999, 2021]);
        assert_eq!(data.years_or_all(Some(1950)).unwrap(), [1950]);
    }

    #[test]
    fn test_load_raw_year_validates() {
        let (_tmp, data) = data_dir();
        fs::write(data.raw_file(2023), format!("[{GAME}, {GAME}]")).unwrap();
        assert_eq!(data.load_raw_year(2023).unwrap().len(), 2);

        let invalid = GAME.replace("\"away_score\": 10", "\"away_score\": \"10\"");
        fs::write(data.raw_file(2022), format!("[{invalid}]")).unwrap();
        let err = data.load_raw_year(2022).unwrap_err();
        assert!(format!("{err:#}").contains("away_score"));
    }

    #[test]
    fn test_missing_raw_file_names_the_path() {
        let (_tmp, data) = data_dir();
        let err = data.load_raw_year(1888).unwrap_err();
        assert!(err.to_string().contains("1888.json"));
    }

    #[test]
    fn test_output_creates_parent_directories() {
        let (tmp, data) = data_dir();
        let path = data.processed_file("training");
        Output::save_json(&vec![1, 2, 3], Some(path.clone())).unwrap();
        let written: Vec<u32> = read_json_file("test", &path).unwrap();
        assert_eq!(written, [1, 2, 3]);
        assert!(tmp.path().join("processed").is_dir());
    }
}
