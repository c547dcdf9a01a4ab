use async_trait::async_trait;
use nursery_core_api::ApiError;
use nursery_core_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::NurseryRepositoryImpl;

impl NurseryRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &NurseryRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let deleted = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("DELETE FROM nursery WHERE id = ANY($1)")
                .bind(ids)
                .execute(&mut **transaction)
                .await
                .map_err(ApiError::from)?
                .rows_affected() as usize
        };

        debug!(requested = ids.len(), deleted, "deleted nurseries");
        Ok(deleted)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for NurseryRepositoryImpl {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}
