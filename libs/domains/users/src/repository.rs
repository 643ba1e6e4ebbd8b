use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
///
/// A missing record surfaces as [`UserError::NotFound`] from every operation
/// that takes an id, so callers can branch on that variant directly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; the store assigns the identifier
    async fn create(&self, name: &str, email: &str) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> UserResult<User>;

    /// Replace a user's email, returning the full updated record
    async fn update_email(&self, id: i64, email: &str) -> UserResult<User>;

    /// Delete a user by ID
    async fn delete(&self, id: i64) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            // Ids start at 1; zero is reserved for "not persisted yet"
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, name: &str, email: &str) -> UserResult<User> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        };

        let mut users = self.users.write().await;
        users.insert(id, user.clone());

        tracing::info!(user_id = id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<User> {
        let users = self.users.read().await;
        users.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn update_email(&self, id: i64, email: &str) -> UserResult<User> {
        let mut users = self.users.write().await;

        let user = users.get_mut(&id).ok_or(UserError::NotFound(id))?;
        user.email = email.to_string();

        tracing::info!(user_id = id, "Updated user email");
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(())
        } else {
            Err(UserError::NotFound(id))
        }
    }
}
