use async_trait::async_trait;
use portfeed_rs::{Arrival, DataDir, FileSource};
use snafu::ResultExt;
use tracing::info;

use crate::{
    DataSource, ExtractionError, ExtractorId, Processor,
    error::extraction_error::{LoadSnafu, ProcessSnafu},
};

pub struct ArrivalsExtractor {
    data_dir: DataDir,
}

impl ArrivalsExtractor {
    pub fn new(data_dir: DataDir) -> Self {
        Self { data_dir }
    }
}

#[async_trait]
impl DataSource for ArrivalsExtractor {
    fn id(&self) -> ExtractorId {
        ExtractorId::Arrivals
    }

    async fn extract(&self, processor: &dyn Processor) -> Result<(), ExtractionError> {
        let arrivals: Vec<Arrival> =
            self.data_dir.load(FileSource::Arrivals).context(LoadSnafu)?;
        let num_records = arrivals.len();

        processor.add_arrivals(arrivals).await.context(ProcessSnafu)?;

        info!("successfully extracted {num_records} arrival records");
        Ok(())
    }
}
