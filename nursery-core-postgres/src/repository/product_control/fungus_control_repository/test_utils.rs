#[cfg(test)]
pub mod test_utils {
    use nursery_core_db::models::product_control::{FungusControlModel, ProductControlCommon};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    pub fn create_test_fungus_control(labor_id: Uuid) -> FungusControlModel {
        let registration_number = format!("ICA-H-{}", &Uuid::new_v4().simple().to_string()[..10]);
        create_test_fungus_control_with_registration(labor_id, &registration_number)
    }

    pub fn create_test_fungus_control_with_registration(labor_id: Uuid, registration_number: &str) -> FungusControlModel {
        FungusControlModel::new(
            labor_id,
            ProductControlCommon::new(registration_number, "Fungicida XYZ", 15, dec!(75000.00)),
            10,
            "Roya",
        )
    }
}
