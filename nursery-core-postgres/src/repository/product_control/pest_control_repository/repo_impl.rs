use crate::executor::Executor;

pub(crate) const PEST_CONTROL_COLUMNS: &str =
    "id, labor_id, registration_number, name, application_frequency_days, value, withdrawal_period_days";

pub struct PestControlRepositoryImpl {
    pub executor: Executor,
}

impl PestControlRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
