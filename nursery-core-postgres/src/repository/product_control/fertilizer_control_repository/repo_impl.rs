use crate::executor::Executor;

pub(crate) const FERTILIZER_CONTROL_COLUMNS: &str =
    "id, labor_id, registration_number, name, application_frequency_days, value, last_application_date";

pub struct FertilizerControlRepositoryImpl {
    pub executor: Executor,
}

impl FertilizerControlRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
