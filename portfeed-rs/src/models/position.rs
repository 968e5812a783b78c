use serde::{Deserialize, Serialize};

use crate::{deserialize_utils::*, string_new_types::NonEmptyString};

use super::VesselParticulars;

/// A live position report. The vessel transform only consumes the embedded
/// particulars; the kinematic fields are carried for the (future) position
/// fact table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselPosition {
    #[serde(default)]
    pub vessel_particulars: Option<VesselParticulars>,
    #[serde(default, deserialize_with = "opt_f64_lossy")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_lossy")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_lossy")]
    pub course: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_lossy")]
    pub speed: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_lossy")]
    pub heading: Option<f64>,
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub timestamp: Option<NonEmptyString>,
}

#[cfg(feature = "test")]
mod test {
    use super::*;
    use crate::models::ImoNumber;

    impl VesselPosition {
        pub fn test_default(imo_number: Option<ImoNumber>) -> VesselPosition {
            VesselPosition {
                vessel_particulars: Some(VesselParticulars::test_default(imo_number)),
                latitude: Some(1.2599),
                longitude: Some(103.8156),
                course: Some(231.0),
                speed: Some(12.3),
                heading: Some(230.0),
                timestamp: Some("2024-03-11 08:30:00".parse().unwrap()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_without_particulars_still_parses() {
        let v: VesselPosition =
            serde_json::from_str(r#"{"latitude": 1.26, "longitude": 103.81}"#).unwrap();
        assert!(v.vessel_particulars.is_none());
        assert_eq!(v.latitude, Some(1.26));
    }
}
