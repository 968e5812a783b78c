use std::str::FromStr;

use async_trait::async_trait;
use harbor_core::{EtlInboundPort, EtlOutboundPort, InsertError, NewVessel, QueryError, Vessel};
use serde::Deserialize;
use snafu::ResultExt;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::instrument;

use crate::error::{
    Result,
    error::{ConnectionSnafu, SchemaSnafu},
};

#[derive(Debug, Clone, Deserialize)]
pub struct SqliteSettings {
    /// Connection string, e.g. `sqlite://maritime_analytics.db` or
    /// `sqlite::memory:`.
    pub db_path: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    4
}

#[derive(Debug, Clone)]
pub struct SqliteAdapter {
    pub(crate) pool: SqlitePool,
}

impl SqliteAdapter {
    pub async fn new(settings: &SqliteSettings) -> Result<SqliteAdapter> {
        let opts = SqliteConnectOptions::from_str(&settings.db_path)
            .context(ConnectionSnafu)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(opts)
            .await
            .context(ConnectionSnafu)?;

        let adapter = SqliteAdapter { pool };
        adapter.create_schema().await?;

        Ok(adapter)
    }

    /// Applies the relational schema. Every statement is `IF NOT EXISTS`,
    /// so reconnecting to an existing database is a no-op.
    async fn create_schema(&self) -> Result<()> {
        sqlx::raw_sql(include_str!("schema.sql"))
            .execute(&self.pool)
            .await
            .context(SchemaSnafu)?;
        Ok(())
    }
}

#[async_trait]
impl EtlInboundPort for SqliteAdapter {
    #[instrument(skip_all, fields(app.num_vessels = vessels.len()))]
    async fn add_vessels(&self, vessels: Vec<NewVessel>) -> std::result::Result<(), InsertError> {
        self.add_vessels_impl(vessels).await?;
        Ok(())
    }
}

#[async_trait]
impl EtlOutboundPort for SqliteAdapter {
    async fn vessels(&self) -> std::result::Result<Vec<Vessel>, QueryError> {
        let vessels = self
            .vessels_impl()
            .await?
            .into_iter()
            .map(Vessel::from)
            .collect();
        Ok(vessels)
    }
}
