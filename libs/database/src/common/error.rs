/// Errors surfaced by this crate's connection and health helpers.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// SeaORM error from the PostgreSQL driver.
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// The connectivity probe ran but reported an unhealthy backend.
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}
