use serde::{Deserialize, Serialize};

use crate::{deserialize_utils::*, string_new_types::NonEmptyString};

use super::VesselParticulars;

/// A vessel departure notice. The departure transform is not implemented
/// yet; the model exists so the extraction source can enumerate the
/// category.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    #[serde(default)]
    pub vessel_particulars: Option<VesselParticulars>,
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub location_from: Option<NonEmptyString>,
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub location_to: Option<NonEmptyString>,
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub reported_time: Option<NonEmptyString>,
}

#[cfg(feature = "test")]
mod test {
    use super::*;
    use crate::models::ImoNumber;

    impl Departure {
        pub fn test_default(imo_number: Option<ImoNumber>) -> Departure {
            Departure {
                vessel_particulars: Some(VesselParticulars::test_default(imo_number)),
                location_from: Some("SGSIN".parse().unwrap()),
                location_to: Some("NLRTM".parse().unwrap()),
                reported_time: Some("2024-03-12 19:45:00".parse().unwrap()),
            }
        }
    }
}
