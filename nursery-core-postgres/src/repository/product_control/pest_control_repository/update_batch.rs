use async_trait::async_trait;
use nursery_core_db::models::product_control::PestControlModel;
use nursery_core_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::PestControlRepositoryImpl;
use crate::utils::{execute_batch, validate_all};

impl PestControlRepositoryImpl {
    pub(super) async fn update_batch_impl(
        repo: &PestControlRepositoryImpl,
        items: Vec<PestControlModel>,
    ) -> Result<Vec<PestControlModel>, Box<dyn Error + Send + Sync>> {
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
                        UPDATE pest_control
                        SET labor_id = $2, registration_number = $3, name = $4,
                            application_frequency_days = $5, value = $6,
                            withdrawal_period_days = $7
                        WHERE id = $1
                        "#,
                    )
                    .bind(item.id)
                    .bind(item.labor_id)
                    .bind(&item.common.registration_number)
                    .bind(&item.common.name)
                    .bind(item.common.application_frequency_days)
                    .bind(item.common.value)
                    .bind(item.withdrawal_period_days);
                    (item.id, query)
                })
                .collect();

            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            execute_batch(transaction, "pest_control", statements, true).await?;
        }

        debug!(count = items.len(), "updated pest controls");
        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, PestControlModel> for PestControlRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<PestControlModel>,
    ) -> Result<Vec<PestControlModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
