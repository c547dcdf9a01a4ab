use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
///
/// Every item is validated before anything is written; one invalid item
/// rejects the whole batch. The inserts run as a single unit: if the storage
/// layer rejects any of them (duplicate key, missing parent) none of the
/// batch is persisted.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Errors
/// The boxed error downcasts to `nursery_core_api::ApiError`:
/// `ValidationError` for rejected input, `IntegrityError` for constraint violations.
#[async_trait]
pub trait CreateBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Save multiple items
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The created entities, in input order
    /// * `Err` - Validation, integrity or database failure
    async fn create_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
