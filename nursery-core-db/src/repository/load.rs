use async_trait::async_trait;
use nursery_core_api::ApiError;
use sqlx::Database;
use uuid::Uuid;

use super::load_batch::LoadBatch;
use crate::models::identifiable::Identifiable;

/// Load a single entity by its ID.
///
/// Implemented for every [`LoadBatch`] repository; a missing entity is an
/// `ApiError::NotFound`.
#[async_trait]
pub trait Load<DB: Database, T: Identifiable>: Send + Sync {
    async fn load(&self, id: Uuid) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
impl<DB, T, R> Load<DB, T> for R
where
    DB: Database,
    T: Identifiable + Send + 'static,
    R: LoadBatch<DB, T>,
{
    async fn load(&self, id: Uuid) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
        self.load_batch(&[id])
            .await?
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| ApiError::NotFound(format!("entity {id}")).into())
    }
}
