use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for deleting multiple entities in a batch
///
/// Deletion cascades down the ownership chain
/// (producer → farm → nursery → labor → control products); descendants are
/// removed in the same statement as their ancestor.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait DeleteBatch<DB: Database>: Send + Sync {
    /// Delete multiple items by their IDs
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of targeted items deleted (descendants not counted)
    /// * `Err` - An error if the statement could not be executed
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
