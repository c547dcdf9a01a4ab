use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::common::ProductControlCommon;
use crate::models::admin::AdminListing;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Pesticide applied during a labor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PestControlModel {
    pub id: Uuid,

    /// References LaborModel.id
    pub labor_id: Uuid,

    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    #[validate(nested)]
    pub common: ProductControlCommon,

    #[validate(range(min = 0))]
    pub withdrawal_period_days: i32,
}

impl PestControlModel {
    pub fn new(labor_id: Uuid, common: ProductControlCommon, withdrawal_period_days: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            labor_id,
            common,
            withdrawal_period_days,
        }
    }
}

impl Identifiable for PestControlModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for PestControlModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Pest control", self.common)
    }
}

impl AdminListing for PestControlModel {
    const ENTITY: &'static str = "pest_control";
    const DISPLAY_FIELDS: &'static [&'static str] = &[
        "name",
        "registration_number",
        "application_frequency_days",
        "value",
        "withdrawal_period_days",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "registration_number"];
    const FILTER_FIELDS: &'static [&'static str] = &["withdrawal_period_days"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PestControlFilter {
    pub search: Option<String>,
    pub withdrawal_period_days: Option<i32>,
}

impl PestControlFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_withdrawal_period_days(mut self, days: i32) -> Self {
        self.withdrawal_period_days = Some(days);
        self
    }
}
