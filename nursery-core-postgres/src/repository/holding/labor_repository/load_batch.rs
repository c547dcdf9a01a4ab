use async_trait::async_trait;
use nursery_core_api::ApiError;
use nursery_core_db::models::holding::LaborModel;
use nursery_core_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{LaborRepositoryImpl, LABOR_COLUMNS};
use crate::utils::order_by_ids;

impl LaborRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &LaborRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<LaborModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {LABOR_COLUMNS} FROM labor WHERE id = ANY($1)");
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query_as::<_, LaborModel>(&query)
                .bind(ids)
                .fetch_all(&mut **transaction)
                .await
                .map_err(ApiError::from)?
        };

        Ok(order_by_ids(ids, rows))
    }
}

#[async_trait]
impl LoadBatch<Postgres, LaborModel> for LaborRepositoryImpl {
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<LaborModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
