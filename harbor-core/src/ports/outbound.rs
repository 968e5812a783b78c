use crate::*;
use async_trait::async_trait;

#[async_trait]
pub trait EtlOutboundPort: Send + Sync {
    async fn vessels(&self) -> Result<Vec<Vessel>, QueryError>;
}
