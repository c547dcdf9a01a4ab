use async_trait::async_trait;
use sqlx::Database;

use crate::models::admin::AdminListing;
use crate::repository::pagination::{Page, PageRequest};

/// Admin list operation: free-text search plus entity-specific filters, paginated.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The listed entity
/// * `F` - The filter type of the entity (e.g. `FarmFilter`)
#[async_trait]
pub trait FindFiltered<DB: Database, T: AdminListing, F: Send + Sync>: Send + Sync {
    /// # Returns
    /// * `Ok(Page<T>)` - The matching entities of the requested page and the total match count
    /// * `Err` - An error if the query could not be executed
    async fn find_filtered(
        &self,
        filter: &F,
        page: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
