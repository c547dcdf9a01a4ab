#[cfg(test)]
pub mod test_utils {
    use nursery_core_db::models::holding::NurseryModel;
    use uuid::Uuid;

    pub fn create_test_nursery(farm_id: Uuid) -> NurseryModel {
        let code = format!("VIV-{}", &Uuid::new_v4().simple().to_string()[..8]);
        NurseryModel::new(farm_id, code, "Café")
    }
}
