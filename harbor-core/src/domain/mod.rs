mod vessel_type;
mod vessels;

pub use vessel_type::*;
pub use vessels::*;
