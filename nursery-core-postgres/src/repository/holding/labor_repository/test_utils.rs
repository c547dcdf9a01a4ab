#[cfg(test)]
pub mod test_utils {
    use chrono::NaiveDate;
    use nursery_core_db::models::holding::LaborModel;
    use uuid::Uuid;

    pub fn labor_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn create_test_labor(nursery_id: Uuid) -> LaborModel {
        LaborModel::new(nursery_id, labor_date(2024, 3, 15), "Aplicación de fungicida preventivo")
    }
}
