use nursery_core_api::ApiError;
use nursery_core_db::models::product_control::PestControlModel;
use std::error::Error;

use super::repo_impl::{PestControlRepositoryImpl, PEST_CONTROL_COLUMNS};

impl PestControlRepositoryImpl {
    /// Looks up a pest control by its ICA registration number.
    pub async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<Option<PestControlModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {PEST_CONTROL_COLUMNS} FROM pest_control WHERE registration_number = $1");
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let control = sqlx::query_as::<_, PestControlModel>(&query)
            .bind(registration_number)
            .fetch_optional(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(control)
    }
}
