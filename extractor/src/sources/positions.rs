use async_trait::async_trait;
use portfeed_rs::{DataDir, FileSource, VesselPosition};
use snafu::ResultExt;
use tracing::info;

use crate::{
    DataSource, ExtractionError, ExtractorId, Processor,
    error::extraction_error::{LoadSnafu, ProcessSnafu},
};

pub struct PositionsExtractor {
    data_dir: DataDir,
}

impl PositionsExtractor {
    pub fn new(data_dir: DataDir) -> Self {
        Self { data_dir }
    }
}

#[async_trait]
impl DataSource for PositionsExtractor {
    fn id(&self) -> ExtractorId {
        ExtractorId::Positions
    }

    async fn extract(&self, processor: &dyn Processor) -> Result<(), ExtractionError> {
        let positions: Vec<VesselPosition> =
            self.data_dir.load(FileSource::Positions).context(LoadSnafu)?;
        let num_records = positions.len();

        processor
            .add_vessel_positions(positions)
            .await
            .context(ProcessSnafu)?;

        info!("successfully extracted {num_records} position reports");
        Ok(())
    }
}
