use async_trait::async_trait;
use nursery_core_api::ApiError;
use nursery_core_db::models::admin::AdminListing;
use nursery_core_db::models::product_control::{PestControlFilter, PestControlModel};
use nursery_core_db::repository::find_filtered::FindFiltered;
use nursery_core_db::repository::pagination::{Page, PageRequest};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::{PestControlRepositoryImpl, PEST_CONTROL_COLUMNS};
use crate::utils::{push_page, push_search};

fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &PestControlFilter) {
    push_search(builder, PestControlModel::SEARCH_FIELDS, filter.search.as_deref());
    if let Some(days) = filter.withdrawal_period_days {
        builder.push(" AND withdrawal_period_days = ").push_bind(days);
    }
}

impl PestControlRepositoryImpl {
    pub(super) async fn find_filtered_impl(
        repo: &PestControlRepositoryImpl,
        filter: &PestControlFilter,
        page: PageRequest,
    ) -> Result<Page<PestControlModel>, Box<dyn Error + Send + Sync>> {
        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT {PEST_CONTROL_COLUMNS} FROM pest_control WHERE TRUE"
        ));
        push_conditions(&mut select, filter);
        select.push(" ORDER BY name, id");
        push_page(&mut select, page.limit, page.offset);

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM pest_control WHERE TRUE");
        push_conditions(&mut count, filter);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let items = select
            .build_query_as::<PestControlModel>()
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
impl FindFiltered<Postgres, PestControlModel, PestControlFilter> for PestControlRepositoryImpl {
    async fn find_filtered(
        &self,
        filter: &PestControlFilter,
        page: PageRequest,
    ) -> Result<Page<PestControlModel>, Box<dyn Error + Send + Sync>> {
        Self::find_filtered_impl(self, filter, page).await
    }
}
