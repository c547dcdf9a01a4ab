use async_trait::async_trait;
use nursery_core_db::models::holding::FarmModel;
use nursery_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::FarmRepositoryImpl;
use crate::utils::{execute_batch, validate_all};

impl FarmRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &FarmRepositoryImpl,
        items: Vec<FarmModel>,
    ) -> Result<Vec<FarmModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        validate_all(&items)?;

        {
            let statements = items
                .iter()
                .map(|item| {
                    let query = sqlx::query(
                        r#"
                        INSERT INTO farm (id, producer_id, cadastral_number, municipality)
                        VALUES ($1, $2, $3, $4)
                        "#,
                    )
                    .bind(item.id)
                    .bind(item.producer_id)
                    .bind(&item.cadastral_number)
                    .bind(&item.municipality);
                    (item.id, query)
                })
                .collect();

            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            execute_batch(transaction, "farm", statements, false).await?;
        }

        debug!(count = items.len(), "created farms");
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, FarmModel> for FarmRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<FarmModel>,
    ) -> Result<Vec<FarmModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
