use async_trait::async_trait;
use nursery_core_api::ApiError;
use nursery_core_db::models::admin::AdminListing;
use nursery_core_db::models::holding::{ProducerFilter, ProducerModel};
use nursery_core_db::repository::find_filtered::FindFiltered;
use nursery_core_db::repository::pagination::{Page, PageRequest};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::{ProducerRepositoryImpl, PRODUCER_COLUMNS};
use crate::utils::{push_page, push_search};

fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &ProducerFilter) {
    push_search(builder, ProducerModel::SEARCH_FIELDS, filter.search.as_deref());
}

impl ProducerRepositoryImpl {
    pub(super) async fn find_filtered_impl(
        repo: &ProducerRepositoryImpl,
        filter: &ProducerFilter,
        page: PageRequest,
    ) -> Result<Page<ProducerModel>, Box<dyn Error + Send + Sync>> {
        let mut select = QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCER_COLUMNS} FROM producer WHERE TRUE"));
        push_conditions(&mut select, filter);
        select.push(" ORDER BY last_name, first_name, id");
        push_page(&mut select, page.limit, page.offset);

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM producer WHERE TRUE");
        push_conditions(&mut count, filter);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let items = select
            .build_query_as::<ProducerModel>()
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
impl FindFiltered<Postgres, ProducerModel, ProducerFilter> for ProducerRepositoryImpl {
    async fn find_filtered(
        &self,
        filter: &ProducerFilter,
        page: PageRequest,
    ) -> Result<Page<ProducerModel>, Box<dyn Error + Send + Sync>> {
        Self::find_filtered_impl(self, filter, page).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use nursery_core_db::models::holding::{ProducerFilter, ProducerModel};
    use nursery_core_db::repository::create_batch::CreateBatch;
    use nursery_core_db::repository::find_filtered::FindFiltered;
    use nursery_core_db::repository::pagination::PageRequest;
    use serial_test::serial;
    use uuid::Uuid;

    #[tokio::test]
    #[serial]
    async fn test_search_over_names_and_document() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let producer_repo = &ctx.holding_repos().producer_repository;

        // Unique marker keeps the search independent of rows committed by other tests
        let marker = Uuid::new_v4().simple().to_string()[..8].to_string();
        let zapata = ProducerModel::new(format!("{marker}01"), "Ana", format!("Zapata{marker}"), "3001112233", "ana@example.com");
        let arango = ProducerModel::new(format!("{marker}02"), "Luis", format!("Arango{marker}"), "3001112244", "luis@example.com");
        producer_repo.create_batch(vec![zapata.clone(), arango.clone()]).await?;

        let page = producer_repo
            .find_filtered(&ProducerFilter::default().with_search(marker.to_uppercase()), PageRequest::default())
            .await?;
        assert_eq!(page.total, 2);
        // Ordered by last name
        assert_eq!(page.items, vec![arango.clone(), zapata.clone()]);

        let page = producer_repo
            .find_filtered(&ProducerFilter::default().with_search(format!("{marker}01")), PageRequest::default())
            .await?;
        assert_eq!(page.items, vec![zapata]);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_pagination() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let producer_repo = &ctx.holding_repos().producer_repository;

        let marker = Uuid::new_v4().simple().to_string()[..8].to_string();
        let producers: Vec<_> = (0..5)
            .map(|i| ProducerModel::new(format!("{marker}{i}"), "Juan", format!("Perez{marker}{i}"), "3001234567", "juan@example.com"))
            .collect();
        producer_repo.create_batch(producers.clone()).await?;

        let filter = ProducerFilter::default().with_search(&marker);
        let first = producer_repo.find_filtered(&filter, PageRequest::for_page(2, 1)).await?;
        assert_eq!(first.total, 5);
        assert_eq!(first.items, producers[0..2].to_vec());
        assert!(first.has_more());
        assert_eq!(first.total_pages(), 3);

        let last = producer_repo.find_filtered(&filter, PageRequest::for_page(2, 3)).await?;
        assert_eq!(last.items, producers[4..5].to_vec());
        assert!(!last.has_more());

        Ok(())
    }
}
