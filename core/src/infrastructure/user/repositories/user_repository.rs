use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::User, ports::UserRepository},
    },
    entity::users::{Column, Entity},
    infrastructure::user::mappers::to_active_model,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let created = Entity::insert(to_active_model(&user))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(User::from(created))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_by_username_or_email(
        &self,
        identifier: String,
    ) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier.clone()))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up user by identifier: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn username_exists(&self, username: String) -> Result<bool, CoreError> {
        let count = Entity::find()
            .filter(Column::Username.eq(username))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check username: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn email_exists(&self, email: String) -> Result<bool, CoreError> {
        let count = Entity::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let updated = Entity::update(to_active_model(&user))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(User::from(updated))
    }
}
