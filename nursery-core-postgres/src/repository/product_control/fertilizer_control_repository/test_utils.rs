#[cfg(test)]
pub mod test_utils {
    use chrono::NaiveDate;
    use nursery_core_db::models::product_control::{FertilizerControlModel, ProductControlCommon};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    pub fn create_test_fertilizer_control(labor_id: Uuid) -> FertilizerControlModel {
        let registration_number = format!("ICA-F-{}", &Uuid::new_v4().simple().to_string()[..10]);
        create_test_fertilizer_control_with_registration(labor_id, &registration_number)
    }

    pub fn create_test_fertilizer_control_with_registration(
        labor_id: Uuid,
        registration_number: &str,
    ) -> FertilizerControlModel {
        FertilizerControlModel::new(
            labor_id,
            ProductControlCommon::new(registration_number, "Fertilizante NPK", 30, dec!(120000.00)),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        )
    }
}
