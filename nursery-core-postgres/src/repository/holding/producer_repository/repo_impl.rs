use crate::executor::Executor;

pub(crate) const PRODUCER_COLUMNS: &str = "id, document, first_name, last_name, phone, email";

pub struct ProducerRepositoryImpl {
    pub executor: Executor,
}

impl ProducerRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
