mod arrival;
mod departure;
mod location;
mod position;
mod vessel_particulars;

pub use arrival::Arrival;
pub use departure::Departure;
pub use location::PortLocation;
pub use position::VesselPosition;
pub use vessel_particulars::{ImoNumber, VesselParticulars};
