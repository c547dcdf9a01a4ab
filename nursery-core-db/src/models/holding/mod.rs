pub mod producer;
pub mod farm;
pub mod nursery;
pub mod labor;

pub use producer::{ProducerFilter, ProducerModel};
pub use farm::{FarmFilter, FarmModel};
pub use nursery::{NurseryFilter, NurseryListingRow, NurseryModel};
pub use labor::{LaborFilter, LaborModel};
