use crate::*;
use async_trait::async_trait;

/// Receives raw record batches from the extraction sources, one ordered
/// batch per category. Batch order is the record order deduplication sees.
#[async_trait]
pub trait ExtractionInboundPort {
    async fn add_vessel_positions(
        &self,
        positions: Vec<portfeed_rs::VesselPosition>,
    ) -> Result<(), InsertError>;
    async fn add_arrivals(&self, arrivals: Vec<portfeed_rs::Arrival>) -> Result<(), InsertError>;
    async fn add_departures(
        &self,
        departures: Vec<portfeed_rs::Departure>,
    ) -> Result<(), InsertError>;
    async fn add_port_locations(
        &self,
        locations: Vec<portfeed_rs::PortLocation>,
    ) -> Result<(), InsertError>;
}

/// Accepts normalized rows for persistence. Insert-vs-upsert policy across
/// repeated runs belongs to the implementing store.
#[async_trait]
pub trait EtlInboundPort: Send + Sync {
    async fn add_vessels(&self, vessels: Vec<NewVessel>) -> Result<(), InsertError>;
}
