use nursery_core_api::ApiError;
use nursery_core_db::models::product_control::PestControlModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{PestControlRepositoryImpl, PEST_CONTROL_COLUMNS};

impl PestControlRepositoryImpl {
    /// Pest controls applied during a labor, ordered by product name.
    pub async fn find_by_labor_id(
        &self,
        labor_id: Uuid,
    ) -> Result<Vec<PestControlModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {PEST_CONTROL_COLUMNS} FROM pest_control WHERE labor_id = $1 ORDER BY name, id"
        );
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let controls = sqlx::query_as::<_, PestControlModel>(&query)
            .bind(labor_id)
            .fetch_all(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(controls)
    }

    pub async fn count_by_labor_id(&self, labor_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pest_control WHERE labor_id = $1")
            .bind(labor_id)
            .fetch_one(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::holding::labor_repository::test_utils::test_utils::create_test_labor;
    use crate::test_helper::{seed_labor, setup_test_context};
    use nursery_core_db::repository::create_batch::CreateBatch;
    use serial_test::serial;
    use super::super::test_utils::test_utils::create_test_pest_control;

    #[tokio::test]
    #[serial]
    async fn test_find_by_labor_id_is_scoped_to_the_labor() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let other_labor = create_test_labor(seeded.nursery.id);
        ctx.holding_repos().labor_repository.create_batch(vec![other_labor.clone()]).await?;
        let pest_repo = &ctx.product_control_repos().pest_control_repository;

        let mut spinosad = create_test_pest_control(seeded.labor.id);
        spinosad.common.name = "Spinosad 12%".to_string();
        let mut abamectin = create_test_pest_control(seeded.labor.id);
        abamectin.common.name = "Abamectina".to_string();
        let elsewhere = create_test_pest_control(other_labor.id);
        pest_repo.create_batch(vec![spinosad.clone(), elsewhere.clone(), abamectin.clone()]).await?;

        assert_eq!(pest_repo.find_by_labor_id(seeded.labor.id).await?, vec![abamectin, spinosad]);
        assert_eq!(pest_repo.count_by_labor_id(seeded.labor.id).await?, 2);
        assert_eq!(pest_repo.find_by_labor_id(other_labor.id).await?, vec![elsewhere]);

        Ok(())
    }
}
