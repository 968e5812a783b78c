use harbor_core::NewVessel;
use snafu::ResultExt;

use crate::{
    SqliteAdapter,
    error::{
        Result,
        error::{QuerySnafu, TransactionSnafu},
    },
    models,
};

impl SqliteAdapter {
    /// Inserts one row per vessel inside a single transaction. An IMO
    /// number already present in the store keeps its existing row; the
    /// first write wins across runs as well as within one.
    pub(crate) async fn add_vessels_impl(&self, vessels: Vec<NewVessel>) -> Result<()> {
        let mut tx = self.pool.begin().await.context(TransactionSnafu)?;

        for vessel in vessels {
            sqlx::query(
                "
INSERT INTO vessels (
    imo_number,
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
    estimated_dwt,
    year_built,
    last_updated
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
ON CONFLICT (imo_number) DO NOTHING
                ",
            )
            .bind(vessel.imo_number.into_inner())
            .bind(&vessel.vessel_name)
            .bind(&vessel.call_sign)
            .bind(vessel.mmsi_number)
            .bind(&vessel.flag)
            .bind(&vessel.vessel_type)
            .bind(vessel.vessel_length)
            .bind(vessel.vessel_breadth)
            .bind(vessel.gross_tonnage)
            .bind(vessel.net_tonnage)
            .bind(vessel.deadweight)
            .bind(vessel.estimated_dwt)
            .bind(vessel.year_built)
            .bind(vessel.last_updated)
            .execute(&mut *tx)
            .await
            .context(QuerySnafu)?;
        }

        tx.commit().await.context(TransactionSnafu)?;
        Ok(())
    }

    pub(crate) async fn vessels_impl(&self) -> Result<Vec<models::Vessel>> {
        sqlx::query_as::<_, models::Vessel>(
            "
SELECT
    imo_number,
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
    estimated_dwt,
    year_built,
    last_updated
FROM vessels
ORDER BY imo_number
            ",
        )
        .fetch_all(&self.pool)
        .await
        .context(QuerySnafu)
    }
}
