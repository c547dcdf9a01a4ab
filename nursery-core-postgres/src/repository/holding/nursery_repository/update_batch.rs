use async_trait::async_trait;
use nursery_core_db::models::holding::NurseryModel;
use nursery_core_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::NurseryRepositoryImpl;
use crate::utils::{execute_batch, validate_all};

impl NurseryRepositoryImpl {
    pub(super) async fn update_batch_impl(
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
                        "UPDATE nursery SET farm_id = $2, code = $3, crop_type = $4 WHERE id = $1",
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
            execute_batch(transaction, "nursery", statements, true).await?;
        }

        debug!(count = items.len(), "updated nurseries");
        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, NurseryModel> for NurseryRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<NurseryModel>,
    ) -> Result<Vec<NurseryModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{api_error, seed_labor, setup_test_context};
    use nursery_core_db::models::holding::NurseryModel;
    use nursery_core_db::repository::create_batch::CreateBatch;
    use nursery_core_db::repository::load::Load;
    use nursery_core_db::repository::update_batch::UpdateBatch;
    use serial_test::serial;
    use tokio_test::assert_err;

    #[tokio::test]
    #[serial]
    async fn test_update_crop_type() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let nursery_repo = &ctx.holding_repos().nursery_repository;

        let mut nursery = seeded.nursery.clone();
        nursery.crop_type = "Cacao".to_string();
        nursery_repo.update_batch(vec![nursery.clone()]).await?;
        assert_eq!(nursery_repo.load(nursery.id).await?.crop_type, "Cacao");

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_rename_to_sibling_code_is_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let nursery_repo = &ctx.holding_repos().nursery_repository;

        let sibling = NurseryModel::new(seeded.farm.id, "VIV-002", "Plátano");
        nursery_repo.create_batch(vec![sibling.clone()]).await?;

        let mut renamed = sibling.clone();
        renamed.code = seeded.nursery.code.clone();
        let error = api_error(assert_err!(nursery_repo.update_batch(vec![renamed]).await));
        assert_eq!(error.constraint(), Some("nursery_farm_id_code_key"));
        assert_eq!(nursery_repo.load(sibling.id).await?, sibling);

        Ok(())
    }
}
