use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

/// Postgres-backed implementation of UserRepository
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, name: &str, email: &str) -> UserResult<User> {
        let active_model = entity::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            email: Set(email.to_string()),
        };

        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<User> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(model.into())
    }

    async fn update_email(&self, id: i64, email: &str) -> UserResult<User> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let mut active_model: entity::ActiveModel = model.into();
        active_model.email = Set(email.to_string());

        let updated = active_model.update(&self.db).await?;

        tracing::info!(user_id = id, "Updated user email");
        Ok(updated.into())
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
