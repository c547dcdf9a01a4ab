use std::fmt;

use nursery_core_api::validation::validate_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields shared by every control product variant.
///
/// Composed into each variant rather than stored on its own; every variant
/// table carries these columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductControlCommon {
    /// ICA registration number, unique within the variant
    #[validate(length(min = 1, max = 50))]
    pub registration_number: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Recommended interval between applications, in days
    #[validate(range(min = 0))]
    pub application_frequency_days: i32,

    /// Monetary value, two fraction digits
    #[validate(custom(function = "validate_money"))]
    pub value: Decimal,
}

impl ProductControlCommon {
    pub fn new(
        registration_number: impl Into<String>,
        name: impl Into<String>,
        application_frequency_days: i32,
        value: Decimal,
    ) -> Self {
        Self {
            registration_number: registration_number.into(),
            name: name.into(),
            application_frequency_days,
            value,
        }
    }
}

impl fmt::Display for ProductControlCommon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ICA: {})", self.name, self.registration_number)
    }
}
