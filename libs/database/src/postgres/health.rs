use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Probe the database with `SELECT 1`.
///
/// Backs the readiness endpoint: a pooled connection that answers the
/// query means PostgreSQL is reachable and accepting work.
///
/// # Example
/// ```ignore
/// use database::postgres::{connect, check_health};
///
/// let db = connect(&db_url).await?;
/// check_health(&db).await.map_err(|e| e.to_string())?;
/// ```
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Probing PostgreSQL");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("PostgreSQL probe failed: {}", e))
    })?;

    debug!("PostgreSQL probe passed");
    Ok(())
}

// Exercised against a live database in integration tests only
