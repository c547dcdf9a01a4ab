use crate::executor::Executor;

pub(crate) const FUNGUS_CONTROL_COLUMNS: &str = "id, labor_id, registration_number, name, application_frequency_days, value, withdrawal_period_days, fungus_name";

pub struct FungusControlRepositoryImpl {
    pub executor: Executor,
}

impl FungusControlRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
