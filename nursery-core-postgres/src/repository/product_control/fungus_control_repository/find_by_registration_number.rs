use nursery_core_api::ApiError;
use nursery_core_db::models::product_control::FungusControlModel;
use std::error::Error;

use super::repo_impl::{FungusControlRepositoryImpl, FUNGUS_CONTROL_COLUMNS};

impl FungusControlRepositoryImpl {
    /// Looks up a fungus control by its ICA registration number.
    pub async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<Option<FungusControlModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {FUNGUS_CONTROL_COLUMNS} FROM fungus_control WHERE registration_number = $1");
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let control = sqlx::query_as::<_, FungusControlModel>(&query)
            .bind(registration_number)
            .fetch_optional(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(control)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{seed_labor, setup_test_context};
    use nursery_core_db::repository::create_batch::CreateBatch;
    use serial_test::serial;
    use super::super::test_utils::test_utils::create_test_fungus_control;

    #[tokio::test]
    #[serial]
    async fn test_find_by_registration_number() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let fungus_repo = &ctx.product_control_repos().fungus_control_repository;

        let control = create_test_fungus_control(seeded.labor.id);
        fungus_repo.create_batch(vec![control.clone()]).await?;

        let found = fungus_repo.find_by_registration_number(&control.common.registration_number).await?;
        assert_eq!(found, Some(control));
        assert!(fungus_repo.find_by_registration_number("ICA-H-00000").await?.is_none());

        Ok(())
    }
}
