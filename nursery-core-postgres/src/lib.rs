pub mod config;
pub mod executor;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::DatabaseConfig;
pub use executor::Executor;
pub use postgres_repositories::{NurseryRepositories, PostgresRepositories};

#[cfg(test)]
pub mod test_helper;
