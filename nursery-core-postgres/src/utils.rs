use std::collections::HashMap;

use nursery_core_api::ApiError;
use nursery_core_db::models::identifiable::Identifiable;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{Connection, Postgres, QueryBuilder, Transaction};
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

/// Validates every item; the first invalid one rejects the batch.
pub fn validate_all<T: Validate>(items: &[T]) -> Result<(), ApiError> {
    for item in items {
        item.validate()?;
    }
    Ok(())
}

/// Runs a batch of write statements inside a savepoint of `transaction`.
///
/// Either every statement is applied or none is: on the first failure the
/// savepoint is rolled back, leaving the enclosing transaction usable. With
/// `require_match`, a statement that affects no row aborts the batch with
/// `ApiError::NotFound`.
pub async fn execute_batch<'q>(
    transaction: &mut Transaction<'static, Postgres>,
    entity: &str,
    statements: Vec<(Uuid, Query<'q, Postgres, PgArguments>)>,
    require_match: bool,
) -> Result<(), ApiError> {
    let mut savepoint = Connection::begin(&mut **transaction).await?;

    for (id, statement) in statements {
        let failure = match statement.execute(&mut *savepoint).await {
            Ok(result) if require_match && result.rows_affected() == 0 => {
                Some(ApiError::NotFound(format!("{entity} {id}")))
            }
            Ok(_) => None,
            Err(error) => Some(ApiError::from(error)),
        };

        if let Some(error) = failure {
            warn!(entity, %id, %error, "rolling back batch");
            savepoint.rollback().await?;
            return Err(error);
        }
    }

    savepoint.commit().await?;
    Ok(())
}

/// Arranges loaded rows in the order of `ids`, `None` where a row is absent.
pub fn order_by_ids<T: Identifiable + Clone>(ids: &[Uuid], rows: Vec<T>) -> Vec<Option<T>> {
    let by_id: HashMap<Uuid, T> = rows.into_iter().map(|row| (row.get_id(), row)).collect();
    ids.iter().map(|id| by_id.get(id).cloned()).collect()
}

/// Escapes LIKE wildcards in `term` and wraps it for a substring match.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Appends a case-insensitive substring match of `term` over `columns`.
///
/// Expects the builder to already be inside a `WHERE` clause. Blank terms add nothing.
pub fn push_search(builder: &mut QueryBuilder<'_, Postgres>, columns: &[&str], term: Option<&str>) {
    let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) else {
        return;
    };
    if columns.is_empty() {
        return;
    }

    let pattern = like_pattern(term);
    builder.push(" AND (");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            builder.push(" OR ");
        }
        builder.push(*column).push(" ILIKE ").push_bind(pattern.clone());
    }
    builder.push(")");
}

/// Appends `LIMIT` / `OFFSET` for a page request.
pub fn push_page(builder: &mut QueryBuilder<'_, Postgres>, limit: usize, offset: usize) {
    builder
        .push(" LIMIT ")
        .push_bind(to_bigint(limit))
        .push(" OFFSET ")
        .push_bind(to_bigint(offset));
}

/// Clamps a page bound into PostgreSQL's BIGINT range.
pub fn to_bigint(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
