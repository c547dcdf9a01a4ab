use std::fmt;

use nursery_core_api::validation::{validate_email_domain, PHONE_NUMBER_REGEX};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::admin::AdminListing;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// A producer owns farms. The identity document is globally unique.
///
/// Deleting a producer deletes every farm it owns, and transitively
/// their nurseries, labors and control products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProducerModel {
    pub id: Uuid,

    /// National identity document
    #[validate(length(min = 1, max = 20))]
    pub document: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(
        length(max = 15),
        regex(
            path = *PHONE_NUMBER_REGEX,
            message = "Phone number must be entered in the format '+999999999'. Up to 15 digits allowed."
        )
    )]
    pub phone: String,

    #[validate(
        email(message = "Enter a valid email address."),
        custom(function = "validate_email_domain"),
        length(max = 254)
    )]
    pub email: String,
}

impl ProducerModel {
    pub fn new(
        document: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document: document.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identifiable for ProducerModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for ProducerModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.document)
    }
}

impl AdminListing for ProducerModel {
    const ENTITY: &'static str = "producer";
    const DISPLAY_FIELDS: &'static [&'static str] =
        &["document", "first_name", "last_name", "phone", "email"];
    const SEARCH_FIELDS: &'static [&'static str] = &["document", "first_name", "last_name"];
}

/// Admin list filter for producers. Producers only support free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProducerFilter {
    pub search: Option<String>,
}

impl ProducerFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}
