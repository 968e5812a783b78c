mod vessel;

pub use vessel::Vessel;
