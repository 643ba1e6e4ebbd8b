//! # Axum Helpers
//!
//! Shared plumbing for the workspace's Axum services.
//!
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//! - **[`http`]**: CORS policy and security-header middleware
//! - **[`errors`]**: structured error responses with stable error codes
//! - **[`extractors`]**: validated JSON bodies and integer id paths
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let app = create_router::<ApiDoc>(Router::new()).await?;
//!
//!     let server = ServerConfig::default();
//!     create_production_app(app, &server, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_postgres,
    create_production_app, create_router, health_router, run_health_checks,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson};
