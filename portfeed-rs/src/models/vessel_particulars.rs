use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::{fmt::Display, str::FromStr};

use crate::{
    deserialize_utils::*,
    error::{
        ParseImoNumberError,
        parse_imo_number_error::{EmptySnafu, NonPositiveSnafu, ParseSnafu},
    },
    string_new_types::NonEmptyString,
};

/// The IMO registration number, the permanent globally unique vessel
/// identity. Records without one cannot be attributed to a vessel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ImoNumber(i64);

impl ImoNumber {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for ImoNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ImoNumber {
    type Err = ParseImoNumberError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return EmptySnafu.fail();
        }
        let parsed: i64 = value.parse().context(ParseSnafu { value })?;
        if parsed <= 0 {
            NonPositiveSnafu { value: parsed }.fail()
        } else {
            Ok(Self(parsed))
        }
    }
}

/// The descriptive vessel attributes repeated on every position report.
///
/// Every field is dirty in practice: the same vessel shows up with and
/// without names, with tonnage as numbers or strings, and with type codes
/// outside the published set. Deserialization therefore degrades per field
/// instead of rejecting the record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselParticulars {
    #[serde(default, deserialize_with = "opt_imo_number")]
    pub imo_number: Option<ImoNumber>,
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub vessel_name: Option<NonEmptyString>,
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub call_sign: Option<NonEmptyString>,
    #[serde(default, deserialize_with = "opt_i64_lossy")]
    pub mmsi_number: Option<i64>,
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub flag: Option<NonEmptyString>,
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub vessel_type: Option<NonEmptyString>,
    #[serde(default, deserialize_with = "opt_f64_lossy")]
    pub vessel_length: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_lossy")]
    pub vessel_breadth: Option<f64>,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub gross_tonnage: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub net_tonnage: f64,
    #[serde(default, deserialize_with = "opt_f64_lossy")]
    pub deadweight: Option<f64>,
    #[serde(default, deserialize_with = "opt_i64_lossy")]
    pub year_built: Option<i64>,
}

#[cfg(feature = "test")]
mod test {
    use super::*;

    impl ImoNumber {
        pub fn test_new(value: i64) -> ImoNumber {
            ImoNumber(value)
        }
    }

    impl VesselParticulars {
        pub fn test_default(imo_number: Option<ImoNumber>) -> VesselParticulars {
            VesselParticulars {
                imo_number,
                vessel_name: Some("MARITIME GLORY".parse().unwrap()),
                call_sign: Some("9V2710".parse().unwrap()),
                mmsi_number: Some(563_027_100),
                flag: Some("SG".parse().unwrap()),
                vessel_type: Some("CT".parse().unwrap()),
                vessel_length: Some(294.0),
                vessel_breadth: Some(32.2),
                gross_tonnage: 52_518.0,
                net_tonnage: 21_456.0,
                deadweight: Some(47_510.0),
                year_built: Some(2011),
            }
        }
    }
}
