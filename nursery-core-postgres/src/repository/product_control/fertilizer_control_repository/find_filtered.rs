use async_trait::async_trait;
use nursery_core_api::ApiError;
use nursery_core_db::models::admin::AdminListing;
use nursery_core_db::models::product_control::{FertilizerControlFilter, FertilizerControlModel};
use nursery_core_db::repository::find_filtered::FindFiltered;
use nursery_core_db::repository::pagination::{Page, PageRequest};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::{FertilizerControlRepositoryImpl, FERTILIZER_CONTROL_COLUMNS};
use crate::utils::{push_page, push_search};

fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &FertilizerControlFilter) {
    push_search(builder, FertilizerControlModel::SEARCH_FIELDS, filter.search.as_deref());
    if let Some(from) = filter.applied_from {
        builder.push(" AND last_application_date >= ").push_bind(from);
    }
    if let Some(to) = filter.applied_to {
        builder.push(" AND last_application_date <= ").push_bind(to);
    }
}

impl FertilizerControlRepositoryImpl {
    pub(super) async fn find_filtered_impl(
        repo: &FertilizerControlRepositoryImpl,
        filter: &FertilizerControlFilter,
        page: PageRequest,
    ) -> Result<Page<FertilizerControlModel>, Box<dyn Error + Send + Sync>> {
        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT {FERTILIZER_CONTROL_COLUMNS} FROM fertilizer_control WHERE TRUE"
        ));
        push_conditions(&mut select, filter);
        select.push(" ORDER BY name, id");
        push_page(&mut select, page.limit, page.offset);

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM fertilizer_control WHERE TRUE");
        push_conditions(&mut count, filter);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let items = select
            .build_query_as::<FertilizerControlModel>()
            .fetch_all(&mut **transaction)
            .await
            .map_err(ApiError::from)?;
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&mut **transaction)
            .await
            .map_err(ApiError::from)?;

        Ok(Page::new(items, total as usize, page))
    }
}

#[async_trait]
impl FindFiltered<Postgres, FertilizerControlModel, FertilizerControlFilter> for FertilizerControlRepositoryImpl {
    async fn find_filtered(
        &self,
        filter: &FertilizerControlFilter,
        page: PageRequest,
    ) -> Result<Page<FertilizerControlModel>, Box<dyn Error + Send + Sync>> {
        Self::find_filtered_impl(self, filter, page).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{seed_labor, setup_test_context};
    use nursery_core_db::models::product_control::FertilizerControlFilter;
    use nursery_core_db::repository::create_batch::CreateBatch;
    use nursery_core_db::repository::find_filtered::FindFiltered;
    use nursery_core_db::repository::pagination::PageRequest;
    use serial_test::serial;
    use chrono::NaiveDate;
    use uuid::Uuid;
    use super::super::test_utils::test_utils::create_test_fertilizer_control;

    #[tokio::test]
    #[serial]
    async fn test_search_and_application_date_range() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let fertilizer_repo = &ctx.product_control_repos().fertilizer_control_repository;

        let marker = Uuid::new_v4().simple().to_string()[..8].to_string();
        let mut urea = create_test_fertilizer_control(seeded.labor.id);
        urea.common.name = format!("Urea {marker}");
        urea.last_application_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut kcl = create_test_fertilizer_control(seeded.labor.id);
        kcl.common.name = format!("KCl {marker}");
        kcl.last_application_date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let mut dap = create_test_fertilizer_control(seeded.labor.id);
        dap.common.name = format!("DAP {marker}");
        dap.last_application_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        fertilizer_repo.create_batch(vec![urea.clone(), kcl.clone(), dap.clone()]).await?;

        let by_search = fertilizer_repo
            .find_filtered(&FertilizerControlFilter::default().with_search(&marker), PageRequest::default())
            .await?;
        assert_eq!(by_search.items, vec![dap.clone(), kcl.clone(), urea.clone()]);

        let february = FertilizerControlFilter::default().with_search(&marker).applied_between(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        );
        let page = fertilizer_repo.find_filtered(&february, PageRequest::default()).await?;
        assert_eq!(page.total, 2);
        assert_eq!(page.items, vec![kcl, urea]);

        Ok(())
    }
}
