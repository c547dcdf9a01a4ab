use nursery_core_api::ApiError;
use nursery_core_db::models::holding::FarmModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{FarmRepositoryImpl, FARM_COLUMNS};

impl FarmRepositoryImpl {
    /// Farms owned by a producer, ordered by cadastral number.
    pub async fn find_by_producer_id(
        &self,
        producer_id: Uuid,
    ) -> Result<Vec<FarmModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {FARM_COLUMNS} FROM farm WHERE producer_id = $1 ORDER BY cadastral_number"
        );
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let farms = sqlx::query_as::<_, FarmModel>(&query)
            .bind(producer_id)
            .fetch_all(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(farms)
    }

    pub async fn count_by_producer_id(&self, producer_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM farm WHERE producer_id = $1")
            .bind(producer_id)
            .fetch_one(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(count as usize)
    }
}
