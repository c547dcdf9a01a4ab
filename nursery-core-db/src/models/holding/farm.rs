use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::admin::AdminListing;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// A farm belongs to exactly one producer. The cadastral number is globally
/// unique regardless of the owning producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct FarmModel {
    pub id: Uuid,

    /// References ProducerModel.id
    pub producer_id: Uuid,

    #[validate(length(min = 1, max = 50))]
    pub cadastral_number: String,

    #[validate(length(min = 1, max = 100))]
    pub municipality: String,
}

impl FarmModel {
    pub fn new(
        producer_id: Uuid,
        cadastral_number: impl Into<String>,
        municipality: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            producer_id,
            cadastral_number: cadastral_number.into(),
            municipality: municipality.into(),
        }
    }
}

impl Identifiable for FarmModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for FarmModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Farm {} - {}", self.cadastral_number, self.municipality)
    }
}

impl AdminListing for FarmModel {
    const ENTITY: &'static str = "farm";
    const DISPLAY_FIELDS: &'static [&'static str] = &["cadastral_number", "municipality", "producer"];
    const SEARCH_FIELDS: &'static [&'static str] = &["cadastral_number", "municipality"];
    const FILTER_FIELDS: &'static [&'static str] = &["municipality"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmFilter {
    pub search: Option<String>,
    /// Exact municipality match
    pub municipality: Option<String>,
}

impl FarmFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = Some(municipality.into());
        self
    }
}
