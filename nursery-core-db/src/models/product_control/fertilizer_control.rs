use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::common::ProductControlCommon;
use crate::models::admin::AdminListing;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Fertilizer applied during a labor, with the date it was last applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct FertilizerControlModel {
    pub id: Uuid,

    /// References LaborModel.id
    pub labor_id: Uuid,

    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    #[validate(nested)]
    pub common: ProductControlCommon,

    pub last_application_date: NaiveDate,
}

impl FertilizerControlModel {
    pub fn new(labor_id: Uuid, common: ProductControlCommon, last_application_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            labor_id,
            common,
            last_application_date,
        }
    }
}

impl Identifiable for FertilizerControlModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for FertilizerControlModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Fertilizer (last application: {})",
            self.common, self.last_application_date
        )
    }
}

impl AdminListing for FertilizerControlModel {
    const ENTITY: &'static str = "fertilizer_control";
    const DISPLAY_FIELDS: &'static [&'static str] = &[
        "name",
        "registration_number",
        "application_frequency_days",
        "value",
        "last_application_date",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "registration_number"];
    const FILTER_FIELDS: &'static [&'static str] = &["last_application_date"];
    const DATE_HIERARCHY: Option<&'static str> = Some("last_application_date");
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FertilizerControlFilter {
    pub search: Option<String>,
    /// Inclusive lower bound on the last application date
    pub applied_from: Option<NaiveDate>,
    /// Inclusive upper bound on the last application date
    pub applied_to: Option<NaiveDate>,
}

impl FertilizerControlFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn applied_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.applied_from = Some(from);
        self.applied_to = Some(to);
        self
    }
}
