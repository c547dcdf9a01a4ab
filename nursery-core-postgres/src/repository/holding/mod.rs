pub mod factory;
pub mod producer_repository;
pub mod farm_repository;
pub mod nursery_repository;
pub mod labor_repository;

pub use factory::{HoldingRepoFactory, HoldingRepositories};
pub use producer_repository::ProducerRepositoryImpl;
pub use farm_repository::FarmRepositoryImpl;
pub use nursery_repository::NurseryRepositoryImpl;
pub use labor_repository::LaborRepositoryImpl;
