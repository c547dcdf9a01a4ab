use async_trait::async_trait;
use nursery_core_db::models::holding::LaborModel;
use nursery_core_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::LaborRepositoryImpl;
use crate::utils::{execute_batch, validate_all};

impl LaborRepositoryImpl {
    pub(super) async fn update_batch_impl(
        repo: &LaborRepositoryImpl,
        items: Vec<LaborModel>,
    ) -> Result<Vec<LaborModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        validate_all(&items)?;

        {
            let statements = items
                .iter()
                .map(|item| {
                    let query = sqlx::query(
                        "UPDATE labor SET nursery_id = $2, date = $3, description = $4 WHERE id = $1",
                    )
                    .bind(item.id)
                    .bind(item.nursery_id)
                    .bind(item.date)
                    .bind(&item.description);
                    (item.id, query)
                })
                .collect();

            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            execute_batch(transaction, "labor", statements, true).await?;
        }

        debug!(count = items.len(), "updated labors");
        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, LaborModel> for LaborRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<LaborModel>,
    ) -> Result<Vec<LaborModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
