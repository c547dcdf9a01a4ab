use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::admin::AdminListing;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// A nursery belongs to exactly one farm. The code is unique within its farm
/// only; two farms may each have a nursery with the same code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct NurseryModel {
    pub id: Uuid,

    /// References FarmModel.id
    pub farm_id: Uuid,

    #[validate(length(min = 1, max = 50))]
    pub code: String,

    #[validate(length(min = 1, max = 100))]
    pub crop_type: String,
}

impl NurseryModel {
    pub fn new(farm_id: Uuid, code: impl Into<String>, crop_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            farm_id,
            code: code.into(),
            crop_type: crop_type.into(),
        }
    }
}

impl Identifiable for NurseryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for NurseryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nursery {} - {}", self.code, self.crop_type)
    }
}

/// A nursery as shown in the admin list, with the `farm` and `producer`
/// columns resolved through the owning farm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct NurseryListingRow {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub nursery: NurseryModel,

    /// Cadastral number of the owning farm
    pub farm: String,

    /// First and last name of the farm's producer
    pub producer: String,
}

impl AdminListing for NurseryModel {
    const ENTITY: &'static str = "nursery";
    const DISPLAY_FIELDS: &'static [&'static str] = &["code", "crop_type", "farm", "producer"];
    const SEARCH_FIELDS: &'static [&'static str] = &["code", "crop_type"];
    const FILTER_FIELDS: &'static [&'static str] = &["crop_type", "farm__municipality"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NurseryFilter {
    pub search: Option<String>,
    pub crop_type: Option<String>,
    /// Municipality of the owning farm
    pub farm_municipality: Option<String>,
}

impl NurseryFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_crop_type(mut self, crop_type: impl Into<String>) -> Self {
        self.crop_type = Some(crop_type.into());
        self
    }

    pub fn with_farm_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.farm_municipality = Some(municipality.into());
        self
    }
}
