//! Shared transaction handling for repositories.
//!
//! Every mutating repository operation runs through [`transaction`]: the
//! closure's work is committed on success and rolled back before the error
//! is handed back to the caller.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};

use crate::errors::{AppError, AppResult};

/// Boxed future returned by transactional closures.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Execute a closure within a transaction.
///
/// The transaction is committed when the closure succeeds and rolled back
/// otherwise. The pooled connection is released on every path.
pub async fn transaction<F, T>(db: &DatabaseConnection, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
    T: Send,
{
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(result) => {
            txn.commit().await?;
            Ok(result)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Map a unique constraint violation to `AlreadyExists`, anything else to a
/// database error.
pub fn conflict_or_db(err: DbErr, message: impl FnOnce() -> String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists(message()),
        _ => AppError::Database(err),
    }
}
