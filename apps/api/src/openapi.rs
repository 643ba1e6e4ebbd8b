//! Aggregated OpenAPI document, served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

/// Top-level API description. Domain docs are nested under their route
/// prefixes so paths in Swagger UI match the deployed URLs.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "Layered user management service with REST endpoints"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
