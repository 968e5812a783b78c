use engine::{Settings, startup::App};
use harbor_core::EtlOutboundPort;
use serde_json::json;
use sqlite::{SqliteAdapter, SqliteSettings};
use std::path::Path;

fn write_json(dir: &Path, category: &str, name: &str, content: &serde_json::Value) {
    let category_dir = dir.join(category);
    std::fs::create_dir_all(&category_dir).unwrap();
    std::fs::write(category_dir.join(name), content.to_string()).unwrap();
}

fn settings(root: &Path) -> Settings {
    Settings {
        sqlite: SqliteSettings {
            db_path: format!("sqlite://{}", root.join("analytics.db").display()),
            max_connections: 1,
        },
        data_dir: root.join("raw_data"),
    }
}

#[tokio::test]
async fn engine_normalizes_positions_into_vessels() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("raw_data");

    write_json(
        &data_dir,
        "positions",
        "positions_01.json",
        &json!([
            {
                "vesselParticulars": {
                    "imoNumber": 9000001,
                    "vesselName": "IRON DUKE",
                    "vesselType": "BC",
                    "grossTonnage": 50000
                },
                "latitude": 1.26,
                "longitude": 103.82
            },
            {
                "vesselParticulars": {
                    "imoNumber": 9000002,
                    "vesselName": "CHEM PIONEER",
                    "vesselType": "CT",
                    "grossTonnage": 30000
                }
            },
            {
                "vesselParticulars": {
                    "imoNumber": 9000001,
                    "vesselName": "IRON DUKE II",
                    "vesselType": "BC",
                    "grossTonnage": 99999
                }
            },
            {
                "vesselParticulars": {
                    "vesselName": "NO IDENTITY",
                    "grossTonnage": 1000
                }
            }
        ]),
    );
    write_json(
        &data_dir,
        "arrivals_cleaned",
        "arrivals_01.json",
        &json!([
            {
                "vesselParticulars": {"imoNumber": 9000001},
                "locationFrom": "SGSIN",
                "locationTo": "NLRTM"
            }
        ]),
    );

    let settings = settings(dir.path());
    App::build(&settings).await.run().await;

    let adapter = SqliteAdapter::new(&settings.sqlite).await.unwrap();
    let vessels = adapter.vessels().await.unwrap();

    assert_eq!(2, vessels.len());

    let bulker = &vessels[0];
    assert_eq!(9_000_001, bulker.imo_number.into_inner());
    assert_eq!(Some("IRON DUKE".to_string()), bulker.vessel_name);
    assert_eq!(50_000.0, bulker.gross_tonnage);
    assert_eq!(85_000, bulker.estimated_dwt);

    let tanker = &vessels[1];
    assert_eq!(9_000_002, tanker.imo_number.into_inner());
    assert_eq!(27_000, tanker.estimated_dwt);
}

#[tokio::test]
async fn rerunning_the_engine_keeps_the_first_write() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("raw_data");

    write_json(
        &data_dir,
        "positions",
        "positions_01.json",
        &json!([
            {
                "vesselParticulars": {
                    "imoNumber": 9000001,
                    "vesselName": "FIRST RUN",
                    "vesselType": "GC",
                    "grossTonnage": 999
                }
            }
        ]),
    );

    let settings = settings(dir.path());
    App::build(&settings).await.run().await;

    write_json(
        &data_dir,
        "positions",
        "positions_02.json",
        &json!([
            {
                "vesselParticulars": {
                    "imoNumber": 9000001,
                    "vesselName": "SECOND RUN",
                    "vesselType": "GC",
                    "grossTonnage": 5000
                }
            }
        ]),
    );
    App::build(&settings).await.run().await;

    let adapter = SqliteAdapter::new(&settings.sqlite).await.unwrap();
    let vessels = adapter.vessels().await.unwrap();

    assert_eq!(1, vessels.len());
    assert_eq!(Some("FIRST RUN".to_string()), vessels[0].vessel_name);
    assert_eq!(1_298, vessels[0].estimated_dwt);
}

#[tokio::test]
async fn empty_data_dir_is_a_clean_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("raw_data")).unwrap();

    let settings = settings(dir.path());
    App::build(&settings).await.run().await;

    let adapter = SqliteAdapter::new(&settings.sqlite).await.unwrap();
    assert!(adapter.vessels().await.unwrap().is_empty());
}
