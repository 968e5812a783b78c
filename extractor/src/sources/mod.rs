mod arrivals;
mod departures;
mod locations;
mod positions;

pub use arrivals::ArrivalsExtractor;
pub use departures::DeparturesExtractor;
pub use locations::LocationsExtractor;
pub use positions::PositionsExtractor;
