use nursery_core_api::ApiError;
use nursery_core_db::models::holding::{NurseryFilter, NurseryListingRow};
use nursery_core_db::repository::pagination::{Page, PageRequest};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::find_filtered::{push_conditions, FROM_NURSERY_JOIN_FARM};
use super::repo_impl::NurseryRepositoryImpl;
use crate::utils::push_page;

const FROM_NURSERY_JOIN_FARM_AND_PRODUCER: &str =
    " FROM nursery n JOIN farm f ON f.id = n.farm_id JOIN producer p ON p.id = f.producer_id WHERE TRUE";

impl NurseryRepositoryImpl {
    /// Same matches and order as `find_filtered`, with the farm's cadastral
    /// number and the producer's name filled in for each row.
    pub async fn find_listing(
        &self,
        filter: &NurseryFilter,
        page: PageRequest,
    ) -> Result<Page<NurseryListingRow>, Box<dyn Error + Send + Sync>> {
        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT n.id, n.farm_id, n.code, n.crop_type, \
             f.cadastral_number AS farm, p.first_name || ' ' || p.last_name AS producer\
             {FROM_NURSERY_JOIN_FARM_AND_PRODUCER}"
        ));
        push_conditions(&mut select, filter);
        select.push(" ORDER BY n.code, n.id");
        push_page(&mut select, page.limit, page.offset);

        let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*){FROM_NURSERY_JOIN_FARM}"));
        push_conditions(&mut count, filter);

        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let items = select
            .build_query_as::<NurseryListingRow>()
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

#[cfg(test)]
mod tests {
    use crate::test_helper::{seed_labor, setup_test_context};
    use nursery_core_db::models::holding::NurseryFilter;
    use nursery_core_db::repository::find_filtered::FindFiltered;
    use nursery_core_db::repository::pagination::PageRequest;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_listing_resolves_farm_and_producer_columns() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let seeded = seed_labor(&ctx).await?;
        let nursery_repo = &ctx.holding_repos().nursery_repository;

        let filter = NurseryFilter::default().with_farm_municipality(seeded.farm.municipality.clone());
        let listing = nursery_repo.find_listing(&filter, PageRequest::default()).await?;
        let plain = nursery_repo.find_filtered(&filter, PageRequest::default()).await?;

        assert_eq!(listing.total, plain.total);
        let row = listing
            .items
            .iter()
            .find(|row| row.nursery.id == seeded.nursery.id)
            .ok_or("seeded nursery missing from listing")?;
        assert_eq!(row.nursery, seeded.nursery);
        assert_eq!(row.farm, seeded.farm.cadastral_number);
        assert_eq!(row.producer, seeded.producer.full_name());

        Ok(())
    }
}
