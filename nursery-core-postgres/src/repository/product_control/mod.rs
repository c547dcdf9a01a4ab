pub mod factory;
pub mod fungus_control_repository;
pub mod pest_control_repository;
pub mod fertilizer_control_repository;

pub use factory::{ProductControlRepoFactory, ProductControlRepositories};
pub use fungus_control_repository::FungusControlRepositoryImpl;
pub use pest_control_repository::PestControlRepositoryImpl;
pub use fertilizer_control_repository::FertilizerControlRepositoryImpl;
