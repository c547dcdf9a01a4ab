use std::sync::Arc;

use super::{FertilizerControlRepositoryImpl, FungusControlRepositoryImpl, PestControlRepositoryImpl};
use crate::executor::Executor;

/// Factory for the fungus, pest and fertilizer control repositories
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductControlRepoFactory;

impl ProductControlRepoFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn build_fungus_control_repo(&self, executor: &Executor) -> Arc<FungusControlRepositoryImpl> {
        Arc::new(FungusControlRepositoryImpl::new(executor.clone()))
    }

    pub fn build_pest_control_repo(&self, executor: &Executor) -> Arc<PestControlRepositoryImpl> {
        Arc::new(PestControlRepositoryImpl::new(executor.clone()))
    }

    pub fn build_fertilizer_control_repo(&self, executor: &Executor) -> Arc<FertilizerControlRepositoryImpl> {
        Arc::new(FertilizerControlRepositoryImpl::new(executor.clone()))
    }

    /// Build all product control repositories on the given executor
    pub fn build_all_repos(&self, executor: &Executor) -> ProductControlRepositories {
        ProductControlRepositories {
            fungus_control_repository: self.build_fungus_control_repo(executor),
            pest_control_repository: self.build_pest_control_repo(executor),
            fertilizer_control_repository: self.build_fertilizer_control_repo(executor),
        }
    }
}

/// Container for all product control repositories of one session
pub struct ProductControlRepositories {
    pub fungus_control_repository: Arc<FungusControlRepositoryImpl>,
    pub pest_control_repository: Arc<PestControlRepositoryImpl>,
    pub fertilizer_control_repository: Arc<FertilizerControlRepositoryImpl>,
}
