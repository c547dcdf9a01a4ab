use async_trait::async_trait;
use nursery_core_api::ApiError;
use nursery_core_db::models::holding::{NurseryFilter, NurseryModel};
use nursery_core_db::repository::find_filtered::FindFiltered;
use nursery_core_db::repository::pagination::{Page, PageRequest};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::NurseryRepositoryImpl;
use crate::utils::{push_page, push_search};

pub(super) const FROM_NURSERY_JOIN_FARM: &str = " FROM nursery n JOIN farm f ON f.id = n.farm_id WHERE TRUE";

pub(super) fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &NurseryFilter) {
    push_search(builder, &["n.code", "n.crop_type"], filter.search.as_deref());
    if let Some(crop_type) = &filter.crop_type {
        builder.push(" AND n.crop_type = ").push_bind(crop_type.clone());
    }
    if let Some(municipality) = &filter.farm_municipality {
        builder.push(" AND f.municipality = ").push_bind(municipality.clone());
    }
}

impl NurseryRepositoryImpl {
    pub(super) async fn find_filtered_impl(
        repo: &NurseryRepositoryImpl,
        filter: &NurseryFilter,
        page: PageRequest,
    ) -> Result<Page<NurseryModel>, Box<dyn Error + Send + Sync>> {
        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT n.id, n.farm_id, n.code, n.crop_type{FROM_NURSERY_JOIN_FARM}"
        ));
        push_conditions(&mut select, filter);
        select.push(" ORDER BY n.code, n.id");
        push_page(&mut select, page.limit, page.offset);

        let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*){FROM_NURSERY_JOIN_FARM}"));
        push_conditions(&mut count, filter);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let items = select
            .build_query_as::<NurseryModel>()
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
impl FindFiltered<Postgres, NurseryModel, NurseryFilter> for NurseryRepositoryImpl {
    async fn find_filtered(
        &self,
        filter: &NurseryFilter,
        page: PageRequest,
    ) -> Result<Page<NurseryModel>, Box<dyn Error + Send + Sync>> {
        Self::find_filtered_impl(self, filter, page).await
    }
}
