//! 用户Repository接口定义

use async_trait::async_trait;

use crate::entities::User;
use crate::errors::RepositoryError;
use crate::value_objects::{UserEmail, UserId};

/// 用户Repository接口
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> Result<User, RepositoryError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: UserEmail) -> Result<Option<User>, RepositoryError>;
}
