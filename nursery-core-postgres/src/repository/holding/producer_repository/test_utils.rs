#[cfg(test)]
pub mod test_utils {
    use nursery_core_db::models::holding::ProducerModel;
    use uuid::Uuid;

    /// Producer with a random, unique document number.
    pub fn create_test_producer() -> ProducerModel {
        let document = Uuid::new_v4().simple().to_string()[..20].to_string();
        create_test_producer_with_document(&document)
    }

    pub fn create_test_producer_with_document(document: &str) -> ProducerModel {
        ProducerModel::new(document, "Juan", "Pérez", "+573001234567", "juan.perez@example.com")
    }
}
