use serde::{Deserialize, Serialize};

use crate::{deserialize_utils::*, string_new_types::NonEmptyString};

use super::VesselParticulars;

/// A vessel arrival notice. The arrival transform is not implemented yet;
/// the model exists so the extraction source can enumerate the category.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrival {
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

    impl Arrival {
        pub fn test_default(imo_number: Option<ImoNumber>) -> Arrival {
            Arrival {
                vessel_particulars: Some(VesselParticulars::test_default(imo_number)),
                location_from: Some("CNSHA".parse().unwrap()),
                location_to: Some("SGSIN".parse().unwrap()),
                reported_time: Some("2024-03-11 06:12:00".parse().unwrap()),
            }
        }
    }
}
