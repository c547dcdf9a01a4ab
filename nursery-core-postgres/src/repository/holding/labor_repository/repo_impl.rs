use crate::executor::Executor;

pub(crate) const LABOR_COLUMNS: &str = "id, nursery_id, date, description";

pub struct LaborRepositoryImpl {
    pub executor: Executor,
}

impl LaborRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
