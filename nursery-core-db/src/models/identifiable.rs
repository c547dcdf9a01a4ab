use uuid::Uuid;

/// Trait for entities that can be uniquely identified by a UUID
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;
}

/// Identifiers of `items`, in order.
pub fn ids_of<T: Identifiable>(items: &[T]) -> Vec<Uuid> {
    items.iter().map(Identifiable::get_id).collect()
}
