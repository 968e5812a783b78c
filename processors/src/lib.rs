#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod processor;
mod vessels;

pub use processor::DataProcessor;
pub use vessels::{SeenVessels, normalize_vessels, resolve_identity};
