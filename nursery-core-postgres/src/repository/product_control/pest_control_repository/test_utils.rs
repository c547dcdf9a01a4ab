#[cfg(test)]
pub mod test_utils {
    use nursery_core_db::models::product_control::{PestControlModel, ProductControlCommon};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    pub fn create_test_pest_control(labor_id: Uuid) -> PestControlModel {
        let registration_number = format!("ICA-P-{}", &Uuid::new_v4().simple().to_string()[..10]);
        create_test_pest_control_with_registration(labor_id, &registration_number)
    }

    pub fn create_test_pest_control_with_registration(labor_id: Uuid, registration_number: &str) -> PestControlModel {
        PestControlModel::new(
            labor_id,
            ProductControlCommon::new(registration_number, "Insecticida ABC", 30, dec!(85000.00)),
            7,
        )
    }
}
