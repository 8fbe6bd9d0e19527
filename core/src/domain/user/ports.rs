use std::future::Future;

use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, user::entities::User};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Login supports either username or email as the identifier.
    fn get_by_username_or_email(
        &self,
        identifier: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn username_exists(
        &self,
        username: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn email_exists(&self, email: String) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}
