use async_trait::async_trait;
use chrono::Utc;
use harbor_core::{EtlInboundPort, ExtractionInboundPort, InsertError};
use portfeed_rs::{Arrival, Departure, PortLocation, VesselPosition};
use tracing::{info, instrument};

use crate::vessels::{SeenVessels, normalize_vessels};

/// Sits between the extraction sources and the sink: raw batches in,
/// normalized rows out.
pub struct DataProcessor {
    sink: Box<dyn EtlInboundPort>,
}

impl DataProcessor {
    pub fn new(sink: Box<dyn EtlInboundPort>) -> DataProcessor {
        DataProcessor { sink }
    }
}

#[async_trait]
impl ExtractionInboundPort for DataProcessor {
    #[instrument(skip_all)]
    async fn add_vessel_positions(
        &self,
        positions: Vec<VesselPosition>,
    ) -> Result<(), InsertError> {
        let vessels = normalize_vessels(&mut SeenVessels::new(), &positions, Utc::now());
        info!(
            "normalized {} vessels from {} position reports",
            vessels.len(),
            positions.len()
        );
        self.sink.add_vessels(vessels).await
    }

    // TODO: arrival transform; needs the port location dimension in place
    // before arrival rows can satisfy their foreign keys.
    async fn add_arrivals(&self, arrivals: Vec<Arrival>) -> Result<(), InsertError> {
        info!(
            "skipping {} arrival records, transform not implemented",
            arrivals.len()
        );
        Ok(())
    }

    async fn add_departures(&self, departures: Vec<Departure>) -> Result<(), InsertError> {
        info!(
            "skipping {} departure records, transform not implemented",
            departures.len()
        );
        Ok(())
    }

    async fn add_port_locations(&self, locations: Vec<PortLocation>) -> Result<(), InsertError> {
        info!(
            "skipping {} location records, transform not implemented",
            locations.len()
        );
        Ok(())
    }
}
