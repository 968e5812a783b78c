use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;
use sqlite::SqliteSettings;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub sqlite: SqliteSettings,
    /// Root of the raw data drop, with one subdirectory per category.
    pub data_dir: PathBuf,
}

impl Settings {
    pub fn new() -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/engine").required(false))
            .add_source(config::Environment::with_prefix("HARBOR_ENGINE").separator("__"))
            .build()?
            .try_deserialize()
    }
}
