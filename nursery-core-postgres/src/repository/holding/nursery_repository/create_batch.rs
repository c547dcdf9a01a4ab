use async_trait::async_trait;
use nursery_core_db::models::holding::NurseryModel;
use nursery_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::NurseryRepositoryImpl;
use crate::utils::{execute_batch, validate_all};

impl NurseryRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &NurseryRepositoryImpl,
        items: Vec<NurseryModel>,
    ) -> Result<Vec<NurseryModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        validate_all(&items)?;

        {
            let statements = items
                .iter()
                .map(|item| {
                    let query = sqlx::query(
                        "INSERT INTO nursery (id, farm_id, code, crop_type) VALUES ($1, $2, $3, $4)",
                    )
                    .bind(item.id)
                    .bind(item.farm_id)
                    .bind(&item.code)
                    .bind(&item.crop_type);
                    (item.id, query)
                })
                .collect();

            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            execute_batch(transaction, "nursery", statements, false).await?;
        }

        debug!(count = items.len(), "created nurseries");
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, NurseryModel> for NurseryRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<NurseryModel>,
    ) -> Result<Vec<NurseryModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
