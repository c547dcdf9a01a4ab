pub mod common;
pub mod fungus_control;
pub mod pest_control;
pub mod fertilizer_control;

pub use common::ProductControlCommon;
pub use fungus_control::{FungusControlFilter, FungusControlModel};
pub use pest_control::{PestControlFilter, PestControlModel};
pub use fertilizer_control::{FertilizerControlFilter, FertilizerControlModel};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductControlKind {
    Fungus,
    Pest,
    Fertilizer,
}

/// Any control product, tagged by variant.
///
/// Each variant is stored in its own table; this type only exists to handle
/// the three collections of a labor uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ProductControl {
    Fungus(FungusControlModel),
    Pest(PestControlModel),
    Fertilizer(FertilizerControlModel),
}

impl ProductControl {
    pub fn id(&self) -> Uuid {
        match self {
            ProductControl::Fungus(item) => item.id,
            ProductControl::Pest(item) => item.id,
            ProductControl::Fertilizer(item) => item.id,
        }
    }

    pub fn labor_id(&self) -> Uuid {
        match self {
            ProductControl::Fungus(item) => item.labor_id,
            ProductControl::Pest(item) => item.labor_id,
            ProductControl::Fertilizer(item) => item.labor_id,
        }
    }

    pub fn common(&self) -> &ProductControlCommon {
        match self {
            ProductControl::Fungus(item) => &item.common,
            ProductControl::Pest(item) => &item.common,
            ProductControl::Fertilizer(item) => &item.common,
        }
    }

    pub fn kind(&self) -> ProductControlKind {
        match self {
            ProductControl::Fungus(_) => ProductControlKind::Fungus,
            ProductControl::Pest(_) => ProductControlKind::Pest,
            ProductControl::Fertilizer(_) => ProductControlKind::Fertilizer,
        }
    }
}

impl From<FungusControlModel> for ProductControl {
    fn from(item: FungusControlModel) -> Self {
        ProductControl::Fungus(item)
    }
}

impl From<PestControlModel> for ProductControl {
    fn from(item: PestControlModel) -> Self {
        ProductControl::Pest(item)
    }
}

impl From<FertilizerControlModel> for ProductControl {
    fn from(item: FertilizerControlModel) -> Self {
        ProductControl::Fertilizer(item)
    }
}

/// The three control product collections of one labor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborControlProducts {
    pub labor_id: Uuid,
    pub fungus: Vec<FungusControlModel>,
    pub pest: Vec<PestControlModel>,
    pub fertilizer: Vec<FertilizerControlModel>,
}

impl LaborControlProducts {
    pub fn count(&self, kind: ProductControlKind) -> usize {
        match kind {
            ProductControlKind::Fungus => self.fungus.len(),
            ProductControlKind::Pest => self.pest.len(),
            ProductControlKind::Fertilizer => self.fertilizer.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.fungus.len() + self.pest.len() + self.fertilizer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All products, fungus first, then pest, then fertilizer.
    pub fn iter(&self) -> impl Iterator<Item = ProductControl> + '_ {
        self.fungus
            .iter()
            .cloned()
            .map(ProductControl::from)
            .chain(self.pest.iter().cloned().map(ProductControl::from))
            .chain(self.fertilizer.iter().cloned().map(ProductControl::from))
    }
}
