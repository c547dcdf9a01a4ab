use async_trait::async_trait;
use nursery_core_api::ApiError;
use nursery_core_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::FertilizerControlRepositoryImpl;

impl FertilizerControlRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &FertilizerControlRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let deleted = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("DELETE FROM fertilizer_control WHERE id = ANY($1)")
                .bind(ids)
                .execute(&mut **transaction)
                .await
                .map_err(ApiError::from)?
                .rows_affected() as usize
        };

        debug!(requested = ids.len(), deleted, "deleted fertilizer controls");
        Ok(deleted)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for FertilizerControlRepositoryImpl {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{seed_labor, setup_test_context};
    use nursery_core_db::repository::create_batch::CreateBatch;
    use nursery_core_db::repository::delete_batch::DeleteBatch;
    use serial_test::serial;
    use super::super::test_utils::test_utils::create_test_fertilizer_control;

    #[tokio::test]
    #[serial]
    async fn test_delete_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let fertilizer_repo = &ctx.product_control_repos().fertilizer_control_repository;

        let kept = create_test_fertilizer_control(seeded.labor.id);
        let removed = create_test_fertilizer_control(seeded.labor.id);
        fertilizer_repo.create_batch(vec![kept.clone(), removed.clone()]).await?;

        assert_eq!(fertilizer_repo.delete_batch(&[removed.id]).await?, 1);
        assert_eq!(fertilizer_repo.find_by_labor_id(seeded.labor.id).await?, vec![kept]);

        Ok(())
    }
}
