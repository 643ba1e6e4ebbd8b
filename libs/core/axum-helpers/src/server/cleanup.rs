//! Connection teardown run during graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM connection pool, logging the outcome.
///
/// Dropping the pool would close it too; closing explicitly puts the
/// result in the shutdown logs.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db, "users_api").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed", name),
        Err(e) => error!("Failed to close PostgreSQL connection '{}': {}", name, e),
    }
}
