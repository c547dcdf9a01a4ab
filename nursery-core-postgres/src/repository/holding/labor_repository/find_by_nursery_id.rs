use nursery_core_api::ApiError;
use nursery_core_db::models::holding::LaborModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{LaborRepositoryImpl, LABOR_COLUMNS};

impl LaborRepositoryImpl {
    /// Labors of a nursery, most recent first.
    pub async fn find_by_nursery_id(
        &self,
        nursery_id: Uuid,
    ) -> Result<Vec<LaborModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {LABOR_COLUMNS} FROM labor WHERE nursery_id = $1 ORDER BY date DESC, id"
        );
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let labors = sqlx::query_as::<_, LaborModel>(&query)
            .bind(nursery_id)
            .fetch_all(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(labors)
    }

    pub async fn count_by_nursery_id(&self, nursery_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM labor WHERE nursery_id = $1")
            .bind(nursery_id)
            .fetch_one(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(count as usize)
    }
}
