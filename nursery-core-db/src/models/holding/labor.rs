use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::admin::AdminListing;
use crate::models::holding::NurseryModel;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// A single field activity performed on a nursery on a given date.
///
/// Control products applied during the labor live in three separate
/// collections (fungus, pest, fertilizer), each referencing the labor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LaborModel {
    pub id: Uuid,

    /// References NurseryModel.id
    pub nursery_id: Uuid,

    pub date: NaiveDate,

    #[validate(length(min = 1))]
    pub description: String,
}

impl LaborModel {
    pub fn new(nursery_id: Uuid, date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nursery_id,
            date,
            description: description.into(),
        }
    }
}

impl LaborModel {
    /// Display string naming the nursery the labor was performed on.
    ///
    /// `Display` only has the nursery id at hand; use this when the nursery
    /// has been loaded.
    pub fn display_with(&self, nursery: &NurseryModel) -> String {
        format!("Labor on {} - {}", nursery, self.date)
    }
}

impl Identifiable for LaborModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for LaborModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Labor on nursery {} - {}", self.nursery_id, self.date)
    }
}

impl AdminListing for LaborModel {
    const ENTITY: &'static str = "labor";
    const DISPLAY_FIELDS: &'static [&'static str] = &["nursery", "date", "description"];
    const FILTER_FIELDS: &'static [&'static str] = &["date", "nursery__crop_type"];
    const DATE_HIERARCHY: Option<&'static str> = Some("date");
}

/// Labors have no search fields; filtering is by date range and crop type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaborFilter {
    /// Inclusive lower bound on the labor date
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the labor date
    pub date_to: Option<NaiveDate>,
    /// Crop type of the nursery the labor was performed on
    pub nursery_crop_type: Option<String>,
}

impl LaborFilter {
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    pub fn on(self, date: NaiveDate) -> Self {
        self.between(date, date)
    }

    pub fn with_nursery_crop_type(mut self, crop_type: impl Into<String>) -> Self {
        self.nursery_crop_type = Some(crop_type.into());
        self
    }
}
