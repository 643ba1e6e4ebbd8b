use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Each operation maps to exactly one repository call. Repository errors are
/// forwarded unchanged, so [`crate::error::UserError::NotFound`] keeps its
/// identity all the way up to the transport layer. Business rules added later
/// (uniqueness checks, audit hooks) belong here, without touching the
/// handlers or the stores.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user
    #[instrument(skip(self))]
    pub async fn create_user(&self, name: &str, email: &str) -> UserResult<User> {
        self.repository.create(name, email).await
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository.get_by_id(id).await
    }

    /// Replace a user's email
    #[instrument(skip(self))]
    pub async fn update_email(&self, id: i64, email: &str) -> UserResult<User> {
        self.repository.update_email(id, email).await
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        self.repository.delete(id).await
    }
}
