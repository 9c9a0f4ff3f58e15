//! Transactional unit of work
//!
//! Writes that span several tables run inside one transaction: either every
//! row lands or none does.

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

use crate::error::AppResult;

/// Run `work` inside a transaction.
///
/// Commits when `work` returns `Ok`, rolls back and hands the error back otherwise.
/// Repositories called from `work` must be given the connection, not the pool.
pub async fn in_transaction<T, F>(pool: &PgPool, work: F) -> AppResult<T>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, AppResult<T>>,
{
    let mut tx = pool.begin().await?;

    match work(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Transaction rollback failed");
            }
            tracing::debug!(error = %err, "Transaction rolled back");
            Err(err)
        }
    }
}
