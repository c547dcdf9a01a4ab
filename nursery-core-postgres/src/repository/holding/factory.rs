use std::sync::Arc;

use super::{FarmRepositoryImpl, LaborRepositoryImpl, NurseryRepositoryImpl, ProducerRepositoryImpl};
use crate::executor::Executor;

/// Factory for the producer / farm / nursery / labor repositories
#[derive(Debug, Default, Clone, Copy)]
pub struct HoldingRepoFactory;

impl HoldingRepoFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn build_producer_repo(&self, executor: &Executor) -> Arc<ProducerRepositoryImpl> {
        Arc::new(ProducerRepositoryImpl::new(executor.clone()))
    }

    pub fn build_farm_repo(&self, executor: &Executor) -> Arc<FarmRepositoryImpl> {
        Arc::new(FarmRepositoryImpl::new(executor.clone()))
    }

    pub fn build_nursery_repo(&self, executor: &Executor) -> Arc<NurseryRepositoryImpl> {
        Arc::new(NurseryRepositoryImpl::new(executor.clone()))
    }

    pub fn build_labor_repo(&self, executor: &Executor) -> Arc<LaborRepositoryImpl> {
        Arc::new(LaborRepositoryImpl::new(executor.clone()))
    }

    /// Build all holding repositories on the given executor
    pub fn build_all_repos(&self, executor: &Executor) -> HoldingRepositories {
        HoldingRepositories {
            producer_repository: self.build_producer_repo(executor),
            farm_repository: self.build_farm_repo(executor),
            nursery_repository: self.build_nursery_repo(executor),
            labor_repository: self.build_labor_repo(executor),
        }
    }
}

/// Container for all holding repositories of one session
pub struct HoldingRepositories {
    pub producer_repository: Arc<ProducerRepositoryImpl>,
    pub farm_repository: Arc<FarmRepositoryImpl>,
    pub nursery_repository: Arc<NurseryRepositoryImpl>,
    pub labor_repository: Arc<LaborRepositoryImpl>,
}
