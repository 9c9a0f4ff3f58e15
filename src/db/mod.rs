//! Database module
//!
//! This module handles database connections, migrations, transactions and repositories.

pub mod connection;
pub mod repositories;
pub mod transaction;

use sqlx::PgPool;

pub use connection::connect;
pub use transaction::in_transaction;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
