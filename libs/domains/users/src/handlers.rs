//! HTTP handlers for the Users API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{ErrorResponse, IdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, RemoveUser, UpdateUserEmail, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user, update_email, delete_user),
    components(schemas(User, CreateUser, UpdateUserEmail, RemoveUser, ErrorResponse)),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Build the users router; the caller nests it under its route prefix.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_user).delete(delete_user))
        .route("/email", put(update_email))
        .route("/{id}", get(get_user))
        .with_state(shared_service)
}

/// Create a new user
///
/// POST /users
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created successfully", body = User),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<Json<User>> {
    let user = service.create_user(&input.name, &input.email).await?;
    Ok(Json(user))
}

/// Fetch a user by id
///
/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Replace a user's email
///
/// PUT /users/email
#[utoipa::path(
    put,
    path = "/email",
    tag = "Users",
    request_body = UpdateUserEmail,
    responses(
        (status = 200, description = "Email updated successfully", body = User),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn update_email<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateUserEmail>,
) -> UserResult<Json<User>> {
    let user = service.update_email(input.user_id, &input.email).await?;
    Ok(Json(user))
}

/// Remove a user, id in the request body
///
/// DELETE /users
#[utoipa::path(
    delete,
    path = "",
    tag = "Users",
    request_body = RemoveUser,
    responses(
        (status = 200, description = "User deleted successfully"),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<RemoveUser>,
) -> UserResult<impl IntoResponse> {
    service.delete_user(input.user_id).await?;
    Ok(StatusCode::OK)
}
