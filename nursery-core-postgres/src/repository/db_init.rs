//! Schema bootstrap and teardown
//!
//! `migrations/*.sql` create the nursery schema and are safe to run on every
//! start (`IF NOT EXISTS`). `cleanup/*.sql` drop it again, in reverse order.

use sqlx::PgPool;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Create the nursery schema by executing migration files in ascending order
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use nursery_core_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let applied = execute_sql_files_in_order(pool, &migrations_dir, true).await?;
    info!(files = applied, "nursery schema initialized");
    Ok(())
}

/// Drop the nursery schema by executing cleanup files in descending order
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    let applied = execute_sql_files_in_order(pool, &cleanup_dir, false).await?;
    info!(files = applied, "nursery schema dropped");
    Ok(())
}

/// Execute the `.sql` files of `dir` sorted by file name, returning how many ran.
async fn execute_sql_files_in_order(
    pool: &PgPool,
    dir: &Path,
    ascending: bool,
) -> Result<usize, sqlx::Error> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    entries.sort();
    if !ascending {
        entries.reverse();
    }

    for path in &entries {
        let sql = fs::read_to_string(path).map_err(sqlx::Error::Io)?;
        debug!(file = %path.display(), "executing schema file");
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::test_database_config;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_init_is_idempotent_and_cleanup_reverses_it() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let config = test_database_config()?;
        let pool = config.connect().await?;

        init_database(&pool).await?;
        init_database(&pool).await?;

        cleanup_database(&pool).await?;
        let remaining: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = current_schema() AND table_name IN ('producer', 'farm', 'nursery', 'labor')",
        )
        .fetch_one(&pool)
        .await?;
        assert_eq!(remaining, 0);

        // Leave the schema in place for the other database tests
        init_database(&pool).await?;
        let restored: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = current_schema() AND table_name IN ('producer', 'farm', 'nursery', 'labor', 'fungus_control', 'pest_control', 'fertilizer_control')",
        )
        .fetch_one(&pool)
        .await?;
        assert_eq!(restored, 7);

        Ok(())
    }
}
