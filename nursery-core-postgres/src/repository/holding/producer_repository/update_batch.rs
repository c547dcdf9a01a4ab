use async_trait::async_trait;
use nursery_core_db::models::holding::ProducerModel;
use nursery_core_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::ProducerRepositoryImpl;
use crate::utils::{execute_batch, validate_all};

impl ProducerRepositoryImpl {
    pub(super) async fn update_batch_impl(
        repo: &ProducerRepositoryImpl,
        items: Vec<ProducerModel>,
    ) -> Result<Vec<ProducerModel>, Box<dyn Error + Send + Sync>> {
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
                        UPDATE producer
                        SET document = $2, first_name = $3, last_name = $4, phone = $5, email = $6
                        WHERE id = $1
                        "#,
                    )
                    .bind(item.id)
                    .bind(&item.document)
                    .bind(&item.first_name)
                    .bind(&item.last_name)
                    .bind(&item.phone)
                    .bind(&item.email);
                    (item.id, query)
                })
                .collect();

            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            execute_batch(transaction, "producer", statements, true).await?;
        }

        debug!(count = items.len(), "updated producers");
        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, ProducerModel> for ProducerRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<ProducerModel>,
    ) -> Result<Vec<ProducerModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
