//! Field rules shared by the nursery models.
//!
//! Format rules (phone, email) and the money rule are applied through
//! `validator` derives on the models; the helpers here are the custom pieces.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Optional `+`, optional leading `1`, then 9 to 15 ASCII digits.
///
/// Kept in sync with the `producer_phone_check` constraint.
pub static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?1?[0-9]{9,15}$").expect("phone number pattern is valid"));

/// Total significant digits allowed in a monetary value.
pub const MONEY_MAX_DIGITS: u32 = 10;

/// Fraction digits allowed in a monetary value.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

pub const PHONE_NUMBER_MESSAGE: &str =
    "Phone number must be entered in the format '+999999999'. Up to 15 digits allowed.";

pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(value)
}

/// Domain part of an email address: `localhost`, a bracketed literal, or a
/// dotted name without empty labels. Complements validator's `email` rule,
/// which accepts `user@host`.
pub fn validate_email_domain(value: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = value.rsplit_once('@') else {
        return Ok(());
    };

    let valid = domain == "localhost"
        || (domain.starts_with('[') && domain.ends_with(']'))
        || (domain.contains('.') && domain.split('.').all(|label| !label.is_empty()));

    if valid {
        Ok(())
    } else {
        Err(error("email", "Enter a valid email address."))
    }
}

/// Non-negative, at most two fraction digits and at most ten digits overall.
pub fn validate_money(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(error("min_value", "Ensure this value is greater than or equal to 0."));
    }

    let normalized = value.normalize();
    if normalized.scale() > MONEY_DECIMAL_PLACES {
        return Err(error(
            "max_decimal_places",
            format!("Ensure that there are no more than {MONEY_DECIMAL_PLACES} decimal places."),
        ));
    }

    let whole_digits_limit = Decimal::from(10_i64.pow(MONEY_MAX_DIGITS - MONEY_DECIMAL_PLACES));
    if normalized.trunc() >= whole_digits_limit {
        return Err(error(
            "max_digits",
            format!("Ensure that there are no more than {MONEY_MAX_DIGITS} digits in total."),
        ));
    }

    Ok(())
}

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
