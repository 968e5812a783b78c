use chrono::{DateTime, Utc};
use portfeed_rs::ImoNumber;

use super::{DEFAULT_DWT_MULTIPLIER, VesselType};

/// A canonical vessel record ready for persistence, one per IMO number.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVessel {
    pub imo_number: ImoNumber,
    pub vessel_name: Option<String>,
    pub call_sign: Option<String>,
    pub mmsi_number: Option<i64>,
    pub flag: Option<String>,
    /// Short type code as reported, including codes outside the known set.
    pub vessel_type: Option<String>,
    pub vessel_length: Option<f64>,
    pub vessel_breadth: Option<f64>,
    pub gross_tonnage: f64,
    pub net_tonnage: f64,
    /// Deadweight as reported by the feed, kept alongside the estimate to
    /// preserve provenance.
    pub deadweight: Option<f64>,
    pub estimated_dwt: i64,
    pub year_built: Option<i64>,
    pub last_updated: DateTime<Utc>,
}

/// A vessel record as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    pub imo_number: ImoNumber,
    pub vessel_name: Option<String>,
    pub call_sign: Option<String>,
    pub mmsi_number: Option<i64>,
    pub flag: Option<String>,
    pub vessel_type: Option<String>,
    pub vessel_length: Option<f64>,
    pub vessel_breadth: Option<f64>,
    pub gross_tonnage: f64,
    pub net_tonnage: f64,
    pub deadweight: Option<f64>,
    pub estimated_dwt: i64,
    pub year_built: Option<i64>,
    pub last_updated: DateTime<Utc>,
}

/// Estimates deadweight tonnage from the reported vessel type and gross
/// tonnage.
///
/// Deadweight is frequently absent or wrong in the raw feeds, so every
/// canonical vessel carries this coarse estimate next to the reported value.
/// Total over all inputs: a non-positive tonnage basis yields 0 and unknown
/// type codes use [`DEFAULT_DWT_MULTIPLIER`]. The result is truncated, not
/// rounded.
pub fn estimate_dwt(vessel_type: Option<&str>, gross_tonnage: f64) -> i64 {
    if gross_tonnage <= 0.0 {
        return 0;
    }

    let multiplier = vessel_type
        .and_then(VesselType::from_code)
        .map(|v| v.dwt_multiplier())
        .unwrap_or(DEFAULT_DWT_MULTIPLIER);

    (gross_tonnage * multiplier).floor() as i64
}

#[cfg(feature = "test")]
mod test {
    use super::*;

    impl NewVessel {
        pub fn test_default(imo_number: ImoNumber) -> NewVessel {
            let vessel_type = "CT".to_string();
            let gross_tonnage = 52_518.0;
            NewVessel {
                imo_number,
                vessel_name: Some("MARITIME GLORY".into()),
                call_sign: Some("9V2710".into()),
                mmsi_number: Some(563_027_100),
                flag: Some("SG".into()),
                vessel_length: Some(294.0),
                vessel_breadth: Some(32.2),
                gross_tonnage,
                net_tonnage: 21_456.0,
                deadweight: Some(47_510.0),
                estimated_dwt: estimate_dwt(Some(&vessel_type), gross_tonnage),
                vessel_type: Some(vessel_type),
                year_built: Some(2011),
                last_updated: Utc::now(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn known_multipliers_are_applied() {
        assert_eq!(17_000, estimate_dwt(Some("BC"), 10_000.0));
        assert_eq!(18_000, estimate_dwt(Some("OT"), 10_000.0));
        assert_eq!(9_000, estimate_dwt(Some("CT"), 10_000.0));
        assert_eq!(5_000, estimate_dwt(Some("SV"), 10_000.0));
    }

    #[test]
    fn unknown_and_missing_types_use_the_default_multiplier() {
        assert_eq!(15_000, estimate_dwt(Some("XX"), 10_000.0));
        assert_eq!(15_000, estimate_dwt(Some(""), 10_000.0));
        assert_eq!(15_000, estimate_dwt(None, 10_000.0));
    }

    #[test]
    fn non_positive_tonnage_yields_zero() {
        assert_eq!(0, estimate_dwt(Some("CT"), 0.0));
        assert_eq!(0, estimate_dwt(Some("BC"), -5.0));
        assert_eq!(0, estimate_dwt(None, 0.0));
    }

    #[test]
    fn result_is_truncated_not_rounded() {
        // 999 * 1.3 = 1298.7
        assert_eq!(1_298, estimate_dwt(Some("GC"), 999.0));
    }

    #[test]
    fn total_over_every_known_type() {
        for vessel_type in VesselType::iter() {
            let estimate = estimate_dwt(Some(vessel_type.code()), 10_000.0);
            assert!(estimate > 0, "no estimate for {vessel_type:?}");
        }
    }

    #[test]
    fn nan_tonnage_does_not_panic() {
        assert_eq!(0, estimate_dwt(Some("BC"), f64::NAN));
    }
}
