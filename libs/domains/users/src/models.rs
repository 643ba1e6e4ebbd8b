use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User entity - matches SQL schema
///
/// `id` is assigned by the store on creation; a zero id means the value has
/// not been persisted yet and must never appear in a successful response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name, immutable after creation
    pub name: String,
    /// Contact email, mutable via the dedicated update operation
    pub email: String,
}

/// Request body for creating a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
}

/// DTO for replacing an existing user's email
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserEmail {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(length(min = 1))]
    pub email: String,
}

/// DTO for deleting a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RemoveUser {
    #[validate(range(min = 1))]
    pub user_id: i64,
}
