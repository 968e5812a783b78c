use std::path::PathBuf;

use glob::glob;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use tracing::debug;

use crate::error::{
    Result,
    error::{GlobSnafu, IoSnafu, JsonSnafu, PatternSnafu},
};

/// The raw data categories delivered by the feed, each a directory of JSON
/// array files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    Arrivals,
    Departures,
    Positions,
    Locations,
}

impl FileSource {
    pub fn pattern(&self) -> &'static str {
        match self {
            FileSource::Arrivals => "arrivals_cleaned/*.json",
            FileSource::Departures => "departures_cleaned/*.json",
            FileSource::Positions => "positions/*.json",
            FileSource::Locations => "locations/*.json",
        }
    }
}

/// Root of the raw data directory tree.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loads every file matching the category's glob pattern and
    /// concatenates their JSON arrays. Files are read in sorted path order;
    /// this is the canonical record order downstream first-write-wins
    /// deduplication observes.
    pub fn load<T: DeserializeOwned>(&self, source: FileSource) -> Result<Vec<T>> {
        let pattern = self.root.join(source.pattern());
        let pattern = pattern.to_string_lossy();

        let mut paths = glob(&pattern)
            .context(PatternSnafu {
                pattern: pattern.to_string(),
            })?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context(GlobSnafu)?;
        paths.sort();

        let mut records = Vec::new();
        for path in paths {
            let file = std::fs::File::open(&path).context(IoSnafu)?;
            let reader = std::io::BufReader::new(file);
            let mut batch: Vec<T> = serde_json::from_reader(reader).context(JsonSnafu)?;
            debug!("loaded {} records from {}", batch.len(), path.display());
            records.append(&mut batch);
        }

        Ok(records)
    }
}
