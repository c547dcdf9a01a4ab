use async_trait::async_trait;
use nursery_core_db::models::holding::FarmModel;
use nursery_core_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::FarmRepositoryImpl;
use crate::utils::{execute_batch, validate_all};

impl FarmRepositoryImpl {
    pub(super) async fn update_batch_impl(
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
                        UPDATE farm
                        SET producer_id = $2, cadastral_number = $3, municipality = $4
                        WHERE id = $1
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
            execute_batch(transaction, "farm", statements, true).await?;
        }

        debug!(count = items.len(), "updated farms");
        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, FarmModel> for FarmRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<FarmModel>,
    ) -> Result<Vec<FarmModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
