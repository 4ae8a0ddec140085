//! Transaction wrapping.

use std::future::Future;
use std::pin::Pin;

use sqlx::{PgConnection, PgPool};

use crate::error::AppError;

/// Future returned by a transaction body, borrowing the connection for `'c`.
pub type TxFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>;

/// Runs `f` inside a database transaction.
///
/// Commits when `f` returns `Ok`, rolls back when it returns `Err`. A
/// failed rollback is logged and the original error is returned; the
/// connection is discarded by the pool in that case.
///
/// # Example
///
/// ```rust,ignore
/// let moved = with_transaction(&pool, |conn| {
///     Box::pin(async move {
///         sqlx::query("UPDATE books SET author = $1 WHERE id = $2")
///             .bind("Soseki")
///             .bind("b1")
///             .execute(&mut *conn)
///             .await?;
///         Ok(())
///     })
/// })
/// .await?;
/// ```
///
/// # Errors
///
/// Returns the error produced by `f`, or [`AppError::Internal`] if the
/// transaction cannot be started or committed.
pub async fn with_transaction<T, F>(pool: &PgPool, f: F) -> Result<T, AppError>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> TxFuture<'c, T> + Send,
{
    let mut tx = pool.begin().await?;

    let outcome = f(&mut *tx).await;

    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_error) = tx.rollback().await {
                tracing::warn!(error = %rollback_error, "transaction rollback failed");
            }
            Err(e)
        }
    }
}
