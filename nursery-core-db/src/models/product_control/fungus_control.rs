use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::common::ProductControlCommon;
use crate::models::admin::AdminListing;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Fungicide applied during a labor, with its withdrawal period and the
/// fungus it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct FungusControlModel {
    pub id: Uuid,

    /// References LaborModel.id
    pub labor_id: Uuid,

    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    #[validate(nested)]
    pub common: ProductControlCommon,

    /// Days required between the last application and harvest
    #[validate(range(min = 0))]
    pub withdrawal_period_days: i32,

    #[validate(length(min = 1, max = 100))]
    pub fungus_name: String,
}

impl FungusControlModel {
    pub fn new(
        labor_id: Uuid,
        common: ProductControlCommon,
        withdrawal_period_days: i32,
        fungus_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            labor_id,
            common,
            withdrawal_period_days,
            fungus_name: fungus_name.into(),
        }
    }
}

impl Identifiable for FungusControlModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for FungusControlModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Fungus control: {}", self.common, self.fungus_name)
    }
}

impl AdminListing for FungusControlModel {
    const ENTITY: &'static str = "fungus_control";
    const DISPLAY_FIELDS: &'static [&'static str] = &[
        "name",
        "registration_number",
        "application_frequency_days",
        "value",
        "withdrawal_period_days",
        "fungus_name",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "registration_number", "fungus_name"];
    const FILTER_FIELDS: &'static [&'static str] = &["fungus_name", "withdrawal_period_days"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FungusControlFilter {
    pub search: Option<String>,
    pub fungus_name: Option<String>,
    pub withdrawal_period_days: Option<i32>,
}

impl FungusControlFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_fungus_name(mut self, fungus_name: impl Into<String>) -> Self {
        self.fungus_name = Some(fungus_name.into());
        self
    }

    pub fn with_withdrawal_period_days(mut self, days: i32) -> Self {
        self.withdrawal_period_days = Some(days);
        self
    }
}
