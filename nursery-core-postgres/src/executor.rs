//! Shared transaction handle for the repositories of one session.

use std::sync::Arc;

use sqlx::{PgPool, Postgres, Transaction};
use tokio::sync::Mutex;

/// One database transaction shared by every repository built for a session.
///
/// Repositories lock `tx` for the duration of a statement group. Once the
/// transaction is committed or rolled back the slot is empty and further
/// use fails with "Transaction has been consumed".
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    pub async fn begin(pool: &PgPool) -> Result<Self, sqlx::Error> {
        Ok(Self::new(pool.begin().await?))
    }

    pub async fn is_active(&self) -> bool {
        self.tx.lock().await.is_some()
    }

    /// Commits the transaction. Committing an already finished executor is a no-op.
    pub async fn commit(&self) -> Result<(), sqlx::Error> {
        let tx = self.tx.lock().await.take();
        match tx {
            Some(tx) => tx.commit().await,
            None => Ok(()),
        }
    }

    /// Rolls the transaction back. Rolling back an already finished executor is a no-op.
    pub async fn rollback(&self) -> Result<(), sqlx::Error> {
        let tx = self.tx.lock().await.take();
        match tx {
            Some(tx) => tx.rollback().await,
            None => Ok(()),
        }
    }
}
