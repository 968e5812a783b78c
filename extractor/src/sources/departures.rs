use async_trait::async_trait;
use portfeed_rs::{DataDir, Departure, FileSource};
use snafu::ResultExt;
use tracing::info;

use crate::{
    DataSource, ExtractionError, ExtractorId, Processor,
    error::extraction_error::{LoadSnafu, ProcessSnafu},
};

pub struct DeparturesExtractor {
    data_dir: DataDir,
}

impl DeparturesExtractor {
    pub fn new(data_dir: DataDir) -> Self {
        Self { data_dir }
    }
}

#[async_trait]
impl DataSource for DeparturesExtractor {
    fn id(&self) -> ExtractorId {
        ExtractorId::Departures
    }

    async fn extract(&self, processor: &dyn Processor) -> Result<(), ExtractionError> {
        let departures: Vec<Departure> =
            self.data_dir.load(FileSource::Departures).context(LoadSnafu)?;
        let num_records = departures.len();

        processor
            .add_departures(departures)
            .await
            .context(ProcessSnafu)?;

        info!("successfully extracted {num_records} departure records");
        Ok(())
    }
}
