use axum::{Router, routing::get};

pub mod health;
pub mod users;

/// Assembles the domain routers. Paths here are prefix-free; the caller
/// nests the result under `/api`.
///
/// Each sub-router captures its state up front, so what comes back is a
/// stateless `Router` ready to merge.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}

/// Router for the readiness probe, kept apart from [`routes`] because it
/// needs `AppState` for the live database check.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
