use nursery_core_api::ApiError;
use nursery_core_db::models::holding::ProducerModel;
use std::error::Error;

use super::repo_impl::{ProducerRepositoryImpl, PRODUCER_COLUMNS};

impl ProducerRepositoryImpl {
    /// Looks up a producer by its identity document.
    pub async fn find_by_document(
        &self,
        document: &str,
    ) -> Result<Option<ProducerModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {PRODUCER_COLUMNS} FROM producer WHERE document = $1");
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let producer = sqlx::query_as::<_, ProducerModel>(&query)
            .bind(document)
            .fetch_optional(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(producer)
    }
}
