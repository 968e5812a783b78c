use async_trait::async_trait;
use portfeed_rs::{DataDir, FileSource, PortLocation};
use snafu::ResultExt;
use tracing::info;

use crate::{
    DataSource, ExtractionError, ExtractorId, Processor,
    error::extraction_error::{LoadSnafu, ProcessSnafu},
};

pub struct LocationsExtractor {
    data_dir: DataDir,
}

impl LocationsExtractor {
    pub fn new(data_dir: DataDir) -> Self {
        Self { data_dir }
    }
}

#[async_trait]
impl DataSource for LocationsExtractor {
    fn id(&self) -> ExtractorId {
        ExtractorId::Locations
    }

    async fn extract(&self, processor: &dyn Processor) -> Result<(), ExtractionError> {
        let locations: Vec<PortLocation> =
            self.data_dir.load(FileSource::Locations).context(LoadSnafu)?;
        let num_records = locations.len();

        processor
            .add_port_locations(locations)
            .await
            .context(ProcessSnafu)?;

        info!("successfully extracted {num_records} location records");
        Ok(())
    }
}
