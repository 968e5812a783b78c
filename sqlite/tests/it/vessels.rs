use harbor_core::{EtlInboundPort, EtlOutboundPort, NewVessel};
use portfeed_rs::ImoNumber;

use crate::helper::test_adapter;

#[tokio::test]
async fn vessels_roundtrip_through_the_store() {
    let adapter = test_adapter().await;

    let vessel = NewVessel::test_default(ImoNumber::test_new(9_434_761));
    adapter.add_vessels(vec![vessel.clone()]).await.unwrap();

    let stored = adapter.vessels().await.unwrap();
    assert_eq!(1, stored.len());
    assert_eq!(vessel.imo_number, stored[0].imo_number);
    assert_eq!(vessel.vessel_name, stored[0].vessel_name);
    assert_eq!(vessel.call_sign, stored[0].call_sign);
    assert_eq!(vessel.vessel_type, stored[0].vessel_type);
    assert_eq!(vessel.gross_tonnage, stored[0].gross_tonnage);
    assert_eq!(vessel.deadweight, stored[0].deadweight);
    assert_eq!(vessel.estimated_dwt, stored[0].estimated_dwt);
    assert_eq!(
        vessel.last_updated.timestamp(),
        stored[0].last_updated.timestamp()
    );
}

#[tokio::test]
async fn repeated_imo_numbers_keep_the_first_row() {
    let adapter = test_adapter().await;

    let mut first = NewVessel::test_default(ImoNumber::test_new(9_000_001));
    first.vessel_name = Some("FIRST NAME".into());
    let mut second = NewVessel::test_default(ImoNumber::test_new(9_000_001));
    second.vessel_name = Some("SECOND NAME".into());

    adapter.add_vessels(vec![first]).await.unwrap();
    adapter.add_vessels(vec![second]).await.unwrap();

    let stored = adapter.vessels().await.unwrap();
    assert_eq!(1, stored.len());
    assert_eq!(Some("FIRST NAME".to_string()), stored[0].vessel_name);
}

#[tokio::test]
async fn vessels_are_ordered_by_imo_number() {
    let adapter = test_adapter().await;

    adapter
        .add_vessels(vec![
            NewVessel::test_default(ImoNumber::test_new(9_000_002)),
            NewVessel::test_default(ImoNumber::test_new(9_000_001)),
        ])
        .await
        .unwrap();

    let stored = adapter.vessels().await.unwrap();
    let imo_numbers: Vec<_> = stored.iter().map(|v| v.imo_number.into_inner()).collect();
    assert_eq!(vec![9_000_001, 9_000_002], imo_numbers);
}

#[tokio::test]
async fn empty_batches_are_accepted() {
    let adapter = test_adapter().await;
    adapter.add_vessels(Vec::new()).await.unwrap();
    assert!(adapter.vessels().await.unwrap().is_empty());
}
