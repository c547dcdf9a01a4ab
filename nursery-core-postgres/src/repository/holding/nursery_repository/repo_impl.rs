use crate::executor::Executor;

pub(crate) const NURSERY_COLUMNS: &str = "id, farm_id, code, crop_type";

pub struct NurseryRepositoryImpl {
    pub executor: Executor,
}

impl NurseryRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
