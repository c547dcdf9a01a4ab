use nursery_core_api::ApiError;
use nursery_core_db::models::holding::NurseryModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{NurseryRepositoryImpl, NURSERY_COLUMNS};

impl NurseryRepositoryImpl {
    /// Nurseries of a farm, ordered by code.
    pub async fn find_by_farm_id(&self, farm_id: Uuid) -> Result<Vec<NurseryModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {NURSERY_COLUMNS} FROM nursery WHERE farm_id = $1 ORDER BY code");
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let nurseries = sqlx::query_as::<_, NurseryModel>(&query)
            .bind(farm_id)
            .fetch_all(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(nurseries)
    }

    pub async fn count_by_farm_id(&self, farm_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM nursery WHERE farm_id = $1")
            .bind(farm_id)
            .fetch_one(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{seed_labor, setup_test_context};
    use nursery_core_db::models::holding::NurseryModel;
    use nursery_core_db::repository::create_batch::CreateBatch;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_find_by_farm_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let nursery_repo = &ctx.holding_repos().nursery_repository;

        // Seeded nursery is VIV-001
        let later = NurseryModel::new(seeded.farm.id, "VIV-003", "Aguacate");
        nursery_repo.create_batch(vec![later.clone()]).await?;

        let nurseries = nursery_repo.find_by_farm_id(seeded.farm.id).await?;
        assert_eq!(nurseries, vec![seeded.nursery, later]);
        assert_eq!(nursery_repo.count_by_farm_id(seeded.farm.id).await?, 2);

        Ok(())
    }
}
