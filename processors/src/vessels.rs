use std::collections::HashSet;

use chrono::{DateTime, Utc};
use harbor_core::{NewVessel, estimate_dwt};
use portfeed_rs::{ImoNumber, NonEmptyString, VesselParticulars, VesselPosition};
use tracing::instrument;

/// Identities already materialized within a single normalization run.
///
/// Owned by the caller: created empty, threaded through the batches of one
/// run, discarded with the run. Nothing is persisted between runs.
#[derive(Debug, Default)]
pub struct SeenVessels {
    seen: HashSet<ImoNumber>,
}

impl SeenVessels {
    pub fn new() -> SeenVessels {
        SeenVessels::default()
    }

    /// Returns `true` the first time `imo_number` is observed, `false` on
    /// every later sighting.
    pub fn first_sighting(&mut self, imo_number: ImoNumber) -> bool {
        self.seen.insert(imo_number)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Extracts the vessel identity from a position report, if it carries one.
pub fn resolve_identity(position: &VesselPosition) -> Option<ImoNumber> {
    position
        .vessel_particulars
        .as_ref()
        .and_then(|p| p.imo_number)
}

/// Reduces a batch of position reports to one canonical vessel per IMO
/// number.
///
/// Single pass in input order; the first record carrying an IMO number
/// determines the vessel's attributes and later sightings are discarded.
/// Records without an identity are dropped. The caller owns the seen-set,
/// so batches normalized against the same `SeenVessels` deduplicate against
/// each other as well. Malformed fields have already degraded to null/zero
/// during deserialization, so no input aborts the batch; an empty result is
/// a valid outcome.
#[instrument(
    skip_all,
    fields(
        app.num_positions = positions.len(),
        app.num_vessels,
        app.missing_identity,
        app.duplicates,
    )
)]
pub fn normalize_vessels(
    seen: &mut SeenVessels,
    positions: &[VesselPosition],
    last_updated: DateTime<Utc>,
) -> Vec<NewVessel> {
    let mut vessels = Vec::new();
    let mut missing_identity = 0_u64;
    let mut duplicates = 0_u64;

    for position in positions {
        let particulars = position.vessel_particulars.as_ref();
        let Some((imo_number, particulars)) = resolve_identity(position).zip(particulars) else {
            missing_identity += 1;
            continue;
        };

        if !seen.first_sighting(imo_number) {
            duplicates += 1;
            continue;
        }

        vessels.push(reconcile_particulars(imo_number, particulars, last_updated));
    }

    let span = tracing::Span::current();
    span.record("app.num_vessels", vessels.len());
    span.record("app.missing_identity", missing_identity);
    span.record("app.duplicates", duplicates);

    vessels
}

/// Maps the wire-shaped particulars onto the canonical vessel row and
/// computes the deadweight estimate from the reconciled type and tonnage.
fn reconcile_particulars(
    imo_number: ImoNumber,
    particulars: &VesselParticulars,
    last_updated: DateTime<Utc>,
) -> NewVessel {
    let VesselParticulars {
        imo_number: _,
        vessel_name,
        call_sign,
        mmsi_number,
        flag,
        vessel_type,
        vessel_length,
        vessel_breadth,
        gross_tonnage,
        net_tonnage,
        deadweight,
        year_built,
    } = particulars;

    NewVessel {
        imo_number,
        vessel_name: vessel_name.clone().map(NonEmptyString::into_inner),
        call_sign: call_sign.clone().map(NonEmptyString::into_inner),
        mmsi_number: *mmsi_number,
        flag: flag.clone().map(NonEmptyString::into_inner),
        vessel_length: *vessel_length,
        vessel_breadth: *vessel_breadth,
        gross_tonnage: *gross_tonnage,
        net_tonnage: *net_tonnage,
        deadweight: *deadweight,
        estimated_dwt: estimate_dwt(vessel_type.as_deref(), *gross_tonnage),
        vessel_type: vessel_type.clone().map(NonEmptyString::into_inner),
        year_built: *year_built,
        last_updated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(imo_number: Option<i64>, vessel_type: &str, gross_tonnage: f64) -> VesselPosition {
        let mut position = VesselPosition::test_default(imo_number.map(ImoNumber::test_new));
        let particulars = position.vessel_particulars.as_mut().unwrap();
        particulars.vessel_type = Some(vessel_type.parse().unwrap());
        particulars.gross_tonnage = gross_tonnage;
        position
    }

    #[test]
    fn first_sighting_wins_over_later_duplicates() {
        let positions = vec![
            position(Some(9_000_001), "BC", 50_000.0),
            position(Some(9_000_002), "CT", 30_000.0),
            position(Some(9_000_001), "BC", 99_999.0),
        ];

        let vessels = normalize_vessels(&mut SeenVessels::new(), &positions, Utc::now());

        assert_eq!(2, vessels.len());
        assert_eq!(9_000_001, vessels[0].imo_number.into_inner());
        assert_eq!(85_000, vessels[0].estimated_dwt);
        assert_eq!(50_000.0, vessels[0].gross_tonnage);
        assert_eq!(9_000_002, vessels[1].imo_number.into_inner());
        assert_eq!(27_000, vessels[1].estimated_dwt);
    }

    #[test]
    fn duplicate_attributes_come_from_the_first_record() {
        let mut first = position(Some(9_000_001), "BC", 50_000.0);
        first
            .vessel_particulars
            .as_mut()
            .unwrap()
            .vessel_name = Some("FIRST NAME".parse().unwrap());

        let mut second = position(Some(9_000_001), "OT", 70_000.0);
        second
            .vessel_particulars
            .as_mut()
            .unwrap()
            .vessel_name = Some("SECOND NAME".parse().unwrap());

        let vessels = normalize_vessels(&mut SeenVessels::new(), &[first, second], Utc::now());

        assert_eq!(1, vessels.len());
        assert_eq!(Some("FIRST NAME".to_string()), vessels[0].vessel_name);
        assert_eq!(Some("BC".to_string()), vessels[0].vessel_type);
    }

    #[test]
    fn records_without_identity_are_dropped() {
        let mut no_particulars = position(Some(1), "BC", 1.0);
        no_particulars.vessel_particulars = None;

        let positions = vec![
            no_particulars,
            position(None, "CT", 30_000.0),
            position(Some(9_000_003), "GC", 12_000.0),
        ];

        let vessels = normalize_vessels(&mut SeenVessels::new(), &positions, Utc::now());

        assert_eq!(1, vessels.len());
        assert_eq!(9_000_003, vessels[0].imo_number.into_inner());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize_vessels(&mut SeenVessels::new(), &[], Utc::now()).is_empty());
    }

    #[test]
    fn normalization_is_deterministic_across_independent_runs() {
        let positions = vec![
            position(Some(9_000_001), "BC", 50_000.0),
            position(None, "CT", 10.0),
            position(Some(9_000_002), "XX", 10_000.0),
            position(Some(9_000_001), "BC", 1.0),
        ];

        let timestamp = Utc::now();
        let first_run = normalize_vessels(&mut SeenVessels::new(), &positions, timestamp);
        let second_run = normalize_vessels(&mut SeenVessels::new(), &positions, timestamp);

        assert_eq!(first_run, second_run);
        assert_eq!(15_000, first_run[1].estimated_dwt);
    }

    #[test]
    fn a_shared_seen_set_deduplicates_across_batches() {
        let mut seen = SeenVessels::new();

        let first_batch = normalize_vessels(
            &mut seen,
            &[position(Some(9_000_001), "BC", 50_000.0)],
            Utc::now(),
        );
        let second_batch = normalize_vessels(
            &mut seen,
            &[
                position(Some(9_000_001), "OT", 70_000.0),
                position(Some(9_000_002), "CT", 30_000.0),
            ],
            Utc::now(),
        );

        assert_eq!(1, first_batch.len());
        assert_eq!(1, second_batch.len());
        assert_eq!(9_000_002, second_batch[0].imo_number.into_inner());
        assert_eq!(2, seen.len());
    }

    #[test]
    fn seen_vessels_reports_only_the_first_sighting() {
        let mut seen = SeenVessels::new();
        assert!(seen.is_empty());
        assert!(seen.first_sighting(ImoNumber::test_new(9_000_001)));
        assert!(!seen.first_sighting(ImoNumber::test_new(9_000_001)));
        assert!(seen.first_sighting(ImoNumber::test_new(9_000_002)));
        assert_eq!(2, seen.len());
    }

    #[test]
    fn identity_resolution_requires_particulars_with_an_imo_number() {
        assert!(resolve_identity(&position(Some(9_000_001), "BC", 1.0)).is_some());
        assert!(resolve_identity(&position(None, "BC", 1.0)).is_none());

        let mut stripped = position(Some(9_000_001), "BC", 1.0);
        stripped.vessel_particulars = None;
        assert!(resolve_identity(&stripped).is_none());
    }
}
