use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::cors::create_cors_layer;
use crate::http::security::security_headers;
use axum::http::HeaderValue;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Assemble the outer router: Swagger UI, `/api`-nested routes, fallbacks,
/// and the shared middleware stack (request tracing, security headers,
/// CORS, compression).
///
/// Health endpoints are deliberately not included; merge `health_router()`
/// plus your own readiness route.
///
/// `CORS_ALLOWED_ORIGIN` must hold a comma-separated origin list, e.g.
/// `http://localhost:3000,https://app.example.com`. Startup fails when it
/// is unset, empty, or unparseable; there is no permissive default.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum_helpers::server::create_router;
/// use utoipa::OpenApi;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* handler paths */))]
/// struct ApiDoc;
///
/// // Domain routes arrive with their state already applied
/// let router = create_router::<ApiDoc>(user_routes).await?;
/// ```
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_swagger_ui::SwaggerUi;

    let allowed_origins = parse_allowed_origins()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_cors_layer(allowed_origins))
        // Compresses responses per Accept-Encoding (gzip, br, zstd, deflate)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Read and validate `CORS_ALLOWED_ORIGIN`.
fn parse_allowed_origins() -> io::Result<Vec<HeaderValue>> {
    let origins_raw = std::env::var("CORS_ALLOWED_ORIGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required. \
             Example: CORS_ALLOWED_ORIGIN=http://localhost:3000,https://example.com",
        )
    })?;

    let origins: Vec<HeaderValue> = origins_raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid CORS_ALLOWED_ORIGIN value '{}': {}", s, e),
                )
            })
        })
        .collect::<Result<_, _>>()?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    info!("CORS configured with allowed origins: {}", origins_raw);
    Ok(origins)
}

/// Serve the router until SIGINT/SIGTERM, then run `cleanup` before
/// returning.
///
/// Shutdown sequence: the signal stops the listener, in-flight requests
/// drain, and `cleanup` gets up to `shutdown_timeout` to release
/// resources (close database pools and the like). Cleanup also runs when
/// the server exits with an error.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::{close_postgres, create_production_app};
///
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     close_postgres(db, "users_api").await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    // Subscribe before serving so the notification cannot be missed
    let mut shutdown_rx = coordinator.subscribe();
    let cleanup_task = tokio::spawn(async move {
        let _ = shutdown_rx.recv().await;

        info!("Running cleanup (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed"),
            Err(_) => {
                tracing::warn!("Cleanup exceeded {:?}, abandoning it", shutdown_timeout);
            }
        }
    });

    let signal_coordinator = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal_coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // An error exit skips the signal path; broadcast so cleanup still runs
    coordinator.shutdown();
    cleanup_task.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(OpenApi)]
    #[openapi(paths())]
    struct TestApiDoc;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn router_requires_cors_origin() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", None::<&str>, || {
            let result = block_on(create_router::<TestApiDoc>(Router::new()));
            assert!(result.is_err());
        });
    }

    #[test]
    fn router_rejects_blank_cors_origin() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let result = block_on(create_router::<TestApiDoc>(Router::new()));
            assert!(result.is_err());
        });
    }

    #[test]
    fn router_accepts_origin_list() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000,https://example.com"),
            || {
                let result = block_on(create_router::<TestApiDoc>(Router::new()));
                assert!(result.is_ok());
            },
        );
    }
}
