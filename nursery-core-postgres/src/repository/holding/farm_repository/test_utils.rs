#[cfg(test)]
pub mod test_utils {
    use nursery_core_db::models::holding::FarmModel;
    use uuid::Uuid;

    /// Farm with a random, unique cadastral number.
    pub fn create_test_farm(producer_id: Uuid) -> FarmModel {
        let cadastral_number = format!("CAT-{}", &Uuid::new_v4().simple().to_string()[..12]);
        FarmModel::new(producer_id, cadastral_number, "Chinchiná")
    }
}
