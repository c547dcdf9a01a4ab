use async_trait::async_trait;
use nursery_core_api::ApiError;
use nursery_core_db::models::holding::{LaborFilter, LaborModel};
use nursery_core_db::repository::find_filtered::FindFiltered;
use nursery_core_db::repository::pagination::{Page, PageRequest};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::LaborRepositoryImpl;
use crate::utils::push_page;

const FROM_LABOR_JOIN_NURSERY: &str = " FROM labor l JOIN nursery n ON n.id = l.nursery_id WHERE TRUE";

fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &LaborFilter) {
    if let Some(from) = filter.date_from {
        builder.push(" AND l.date >= ").push_bind(from);
    }
    if let Some(to) = filter.date_to {
        builder.push(" AND l.date <= ").push_bind(to);
    }
    if let Some(crop_type) = &filter.nursery_crop_type {
        builder.push(" AND n.crop_type = ").push_bind(crop_type.clone());
    }
}

impl LaborRepositoryImpl {
    pub(super) async fn find_filtered_impl(
        repo: &LaborRepositoryImpl,
        filter: &LaborFilter,
        page: PageRequest,
    ) -> Result<Page<LaborModel>, Box<dyn Error + Send + Sync>> {
        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT l.id, l.nursery_id, l.date, l.description{FROM_LABOR_JOIN_NURSERY}"
        ));
        push_conditions(&mut select, filter);
        select.push(" ORDER BY l.date DESC, l.id");
        push_page(&mut select, page.limit, page.offset);

        let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*){FROM_LABOR_JOIN_NURSERY}"));
        push_conditions(&mut count, filter);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let items = select
            .build_query_as::<LaborModel>()
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
impl FindFiltered<Postgres, LaborModel, LaborFilter> for LaborRepositoryImpl {
    async fn find_filtered(
        &self,
        filter: &LaborFilter,
        page: PageRequest,
    ) -> Result<Page<LaborModel>, Box<dyn Error + Send + Sync>> {
        Self::find_filtered_impl(self, filter, page).await
    }
}
