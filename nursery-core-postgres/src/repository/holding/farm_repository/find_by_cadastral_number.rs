use nursery_core_api::ApiError;
use nursery_core_db::models::holding::FarmModel;
use std::error::Error;

use super::repo_impl::{FarmRepositoryImpl, FARM_COLUMNS};

impl FarmRepositoryImpl {
    pub async fn find_by_cadastral_number(
        &self,
        cadastral_number: &str,
    ) -> Result<Option<FarmModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {FARM_COLUMNS} FROM farm WHERE cadastral_number = $1");
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let farm = sqlx::query_as::<_, FarmModel>(&query)
            .bind(cadastral_number)
            .fetch_optional(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(farm)
    }
}
