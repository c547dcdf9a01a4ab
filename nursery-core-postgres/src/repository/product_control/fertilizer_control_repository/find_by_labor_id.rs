use nursery_core_api::ApiError;
use nursery_core_db::models::product_control::FertilizerControlModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{FertilizerControlRepositoryImpl, FERTILIZER_CONTROL_COLUMNS};

impl FertilizerControlRepositoryImpl {
    /// Fertilizer controls applied during a labor, ordered by product name.
    pub async fn find_by_labor_id(
        &self,
        labor_id: Uuid,
    ) -> Result<Vec<FertilizerControlModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {FERTILIZER_CONTROL_COLUMNS} FROM fertilizer_control WHERE labor_id = $1 ORDER BY name, id"
        );
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let controls = sqlx::query_as::<_, FertilizerControlModel>(&query)
            .bind(labor_id)
            .fetch_all(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(controls)
    }

    pub async fn count_by_labor_id(&self, labor_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fertilizer_control WHERE labor_id = $1")
            .bind(labor_id)
            .fetch_one(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(count as usize)
    }
}
