use crate::executor::Executor;

pub(crate) const FARM_COLUMNS: &str = "id, producer_id, cadastral_number, municipality";

pub struct FarmRepositoryImpl {
    pub executor: Executor,
}

impl FarmRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
