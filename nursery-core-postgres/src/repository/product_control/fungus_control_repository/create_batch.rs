use async_trait::async_trait;
use nursery_core_db::models::product_control::FungusControlModel;
use nursery_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::FungusControlRepositoryImpl;
use crate::utils::{execute_batch, validate_all};

impl FungusControlRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &FungusControlRepositoryImpl,
        items: Vec<FungusControlModel>,
    ) -> Result<Vec<FungusControlModel>, Box<dyn Error + Send + Sync>> {
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
                        INSERT INTO fungus_control (
                            id, labor_id, registration_number, name, application_frequency_days,
                            value, withdrawal_period_days, fungus_name
                        )
                        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                        "#,
                    )
                    .bind(item.id)
                    .bind(item.labor_id)
                    .bind(&item.common.registration_number)
                    .bind(&item.common.name)
                    .bind(item.common.application_frequency_days)
                    .bind(item.common.value)
                    .bind(item.withdrawal_period_days)
                    .bind(&item.fungus_name);
                    (item.id, query)
                })
                .collect();

            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            execute_batch(transaction, "fungus_control", statements, false).await?;
        }

        debug!(count = items.len(), "created fungus controls");
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, FungusControlModel> for FungusControlRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<FungusControlModel>,
    ) -> Result<Vec<FungusControlModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{api_error, seed_labor, setup_test_context};
    use nursery_core_db::repository::create_batch::CreateBatch;
    use nursery_core_db::repository::load::Load;
    use rust_decimal_macros::dec;
    use serial_test::serial;
    use tokio_test::assert_err;
    use super::super::test_utils::test_utils::{create_test_fungus_control, create_test_fungus_control_with_registration};

    #[tokio::test]
    #[serial]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let fungus_repo = &ctx.product_control_repos().fungus_control_repository;

        let control = create_test_fungus_control_with_registration(seeded.labor.id, "ICA-H-12345");
        fungus_repo.create_batch(vec![control.clone()]).await?;

        let loaded = fungus_repo.load(control.id).await?;
        assert_eq!(loaded, control);
        assert_eq!(loaded.common.value, dec!(75000.00));
        assert_eq!(loaded.to_string(), "Fungicida XYZ (ICA: ICA-H-12345) - Fungus control: Roya");
        assert_eq!(fungus_repo.count_by_labor_id(seeded.labor.id).await?, 1);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_duplicate_registration_number_is_integrity_error() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let fungus_repo = &ctx.product_control_repos().fungus_control_repository;

        let first = create_test_fungus_control(seeded.labor.id);
        let duplicate = create_test_fungus_control_with_registration(seeded.labor.id, &first.common.registration_number);
        fungus_repo.create_batch(vec![first]).await?;

        let error = api_error(assert_err!(fungus_repo.create_batch(vec![duplicate]).await));
        assert_eq!(error.constraint(), Some("fungus_control_registration_number_key"));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_negative_and_over_precise_values_are_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let fungus_repo = &ctx.product_control_repos().fungus_control_repository;

        let mut negative = create_test_fungus_control(seeded.labor.id);
        negative.common.value = dec!(-1.00);
        negative.withdrawal_period_days = -3;
        let error = api_error(assert_err!(fungus_repo.create_batch(vec![negative]).await));
        assert!(error.is_validation());
        assert_eq!(error.fields(), ["common.value", "withdrawal_period_days"]);

        let mut over_precise = create_test_fungus_control(seeded.labor.id);
        over_precise.common.value = dec!(10.555);
        let error = api_error(assert_err!(fungus_repo.create_batch(vec![over_precise]).await));
        assert_eq!(error.fields(), ["common.value"]);

        assert_eq!(fungus_repo.count_by_labor_id(seeded.labor.id).await?, 0);

        Ok(())
    }
}
