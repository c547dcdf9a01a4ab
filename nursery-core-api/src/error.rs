use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Error, Debug)]
pub enum ApiError {
    /// A field failed a format or range check before anything was written.
    #[error("Validation error on {}: {}", .fields.join(", "), .message)]
    ValidationError { fields: Vec<String>, message: String },

    /// The storage layer rejected the write (duplicate key or missing parent).
    #[error("Integrity error on {}: {}", .constraint.as_deref().unwrap_or("unknown constraint"), .message)]
    IntegrityError {
        constraint: Option<String>,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::ValidationError {
            fields: vec![field.into()],
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::ValidationError { .. })
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, ApiError::IntegrityError { .. })
    }

    /// Offending field paths of a validation error, empty for other kinds.
    pub fn fields(&self) -> &[String] {
        match self {
            ApiError::ValidationError { fields, .. } => fields,
            _ => &[],
        }
    }

    /// Violated constraint name of an integrity error, if the database reported one.
    pub fn constraint(&self) -> Option<&str> {
        match self {
            ApiError::IntegrityError { constraint, .. } => constraint.as_deref(),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut entries = Vec::new();
        collect_field_errors(&errors, "", &mut entries);
        entries.sort();

        let mut fields: Vec<String> = entries.iter().map(|(field, _)| field.clone()).collect();
        fields.dedup();
        let message = entries
            .into_iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");

        ApiError::ValidationError { fields, message }
    }
}

/// Flattens nested validation errors into `(path, message)` pairs.
/// Nested struct fields are reported as `parent.child`, list items as `parent[i].child`.
fn collect_field_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match &error {
            sqlx::Error::Database(db_error) => {
                let constraint = db_error.constraint().map(str::to_string);
                let message = db_error.message().to_string();
                match db_error.kind() {
                    ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation => {
                        ApiError::IntegrityError { constraint, message }
                    }
                    ErrorKind::CheckViolation | ErrorKind::NotNullViolation => ApiError::ValidationError {
                        fields: constraint
                            .map(|name| checked_column(&name, db_error.table()))
                            .into_iter()
                            .collect(),
                        message,
                    },
                    _ => ApiError::DatabaseError(error.to_string()),
                }
            }
            sqlx::Error::RowNotFound => ApiError::NotFound(error.to_string()),
            _ => ApiError::DatabaseError(error.to_string()),
        }
    }
}

/// Column guarded by a `<table>_<column>_check` constraint; other names are kept as is.
#[cfg(feature = "sqlx")]
fn checked_column(constraint: &str, table: Option<&str>) -> String {
    let column = constraint.strip_suffix("_check").unwrap_or(constraint);
    table
        .and_then(|table| column.strip_prefix(table)?.strip_prefix('_'))
        .unwrap_or(column)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Inner {
        #[validate(range(min = 0))]
        days: i32,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(email)]
        email: String,
        #[validate(length(min = 1, max = 5))]
        code: String,
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn test_validation_errors_name_every_offending_field() {
        let outer = Outer {
            email: "not-an-email".to_string(),
            code: "too-long-code".to_string(),
            inner: Inner { days: -1 },
        };

        let error = ApiError::from(outer.validate().unwrap_err());

        assert!(error.is_validation());
        assert_eq!(error.fields(), ["code", "email", "inner.days"]);
        assert!(error.to_string().starts_with("Validation error on code, email, inner.days"));
    }

    #[test]
    fn test_valid_struct_produces_no_error() {
        let outer = Outer {
            email: "juan.perez@example.com".to_string(),
            code: "V1".to_string(),
            inner: Inner { days: 0 },
        };

        assert!(outer.validate().is_ok());
    }

    #[test]
    fn test_integrity_error_accessors() {
        let error = ApiError::IntegrityError {
            constraint: Some("producer_document_key".to_string()),
            message: "duplicate key".to_string(),
        };

        assert!(error.is_integrity());
        assert!(!error.is_validation());
        assert_eq!(error.constraint(), Some("producer_document_key"));
        assert!(error.fields().is_empty());
        assert_eq!(
            error.to_string(),
            "Integrity error on producer_document_key: duplicate key"
        );
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_check_constraint_maps_to_column() {
        assert_eq!(checked_column("producer_phone_check", Some("producer")), "phone");
        assert_eq!(checked_column("fungus_control_value_check", Some("fungus_control")), "value");
        assert_eq!(checked_column("custom_rule", Some("farm")), "custom_rule");
        assert_eq!(checked_column("labor_date_check", None), "labor_date");
    }
}
