pub mod repo_impl;
pub mod create_batch;
pub mod load_batch;
pub mod update_batch;
pub mod delete_batch;
pub mod find_by_farm_id;
pub mod find_filtered;
pub mod find_listing;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::NurseryRepositoryImpl;
