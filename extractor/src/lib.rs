#![deny(warnings)]
#![deny(rust_2018_idioms)]

use async_trait::async_trait;
use harbor_core::ExtractionInboundPort;
use portfeed_rs::DataDir;
use tracing::{Level, event, instrument};

mod error;
mod sources;

pub use error::*;
pub use sources::*;

pub trait Processor: ExtractionInboundPort + Send + Sync {}
impl<T> Processor for T where T: ExtractionInboundPort + Send + Sync {}

/// Runs every extraction source against the processor, one ordered batch
/// per category. A failing source is logged and does not abort the others.
pub struct Extractor {
    sources: Vec<Box<dyn DataSource + Send + Sync>>,
    processor: Box<dyn Processor>,
}

#[async_trait]
pub trait DataSource: Send + Sync {
    fn id(&self) -> ExtractorId;
    async fn extract(&self, processor: &dyn Processor) -> Result<(), ExtractionError>;
}

impl Extractor {
    pub fn new(data_dir: DataDir, processor: Box<dyn Processor>) -> Extractor {
        let locations_extractor = LocationsExtractor::new(data_dir.clone());
        let positions_extractor = PositionsExtractor::new(data_dir.clone());
        let arrivals_extractor = ArrivalsExtractor::new(data_dir.clone());
        let departures_extractor = DeparturesExtractor::new(data_dir);

        Extractor {
            sources: vec![
                Box::new(locations_extractor),
                Box::new(positions_extractor),
                Box::new(arrivals_extractor),
                Box::new(departures_extractor),
            ],
            processor,
        }
    }

    pub async fn run(&self) {
        for s in &self.sources {
            self.run_source(s.as_ref()).await;
        }
    }

    #[instrument(skip_all, fields(app.extractor))]
    async fn run_source(&self, s: &dyn DataSource) {
        tracing::Span::current().record("app.extractor", s.id().to_string());
        if let Err(e) = s.extract(self.processor.as_ref()).await {
            event!(Level::ERROR, "failed to run extractor: {:?}", e);
        }
    }
}

pub enum ExtractorId {
    Arrivals,
    Departures,
    Positions,
    Locations,
}

impl std::fmt::Display for ExtractorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractorId::Arrivals => write!(f, "arrivals_extractor"),
            ExtractorId::Departures => write!(f, "departures_extractor"),
            ExtractorId::Positions => write!(f, "positions_extractor"),
            ExtractorId::Locations => write!(f, "locations_extractor"),
        }
    }
}
