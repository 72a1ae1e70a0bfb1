//! 打卡Repository接口定义

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::CheckIn;
use crate::errors::RepositoryError;
use crate::repositories::Pagination;
use crate::value_objects::{CheckInId, UserId};

/// 打卡Repository接口
///
/// `create` 受"每用户每自然日一条"唯一约束保护，
/// 冲突时返回 [`RepositoryError::Conflict`]。
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    async fn create(&self, check_in: CheckIn) -> Result<CheckIn, RepositoryError>;

    /// 持久化已有打卡的变更（目前只有 `validated_at`）。
    async fn save(&self, check_in: CheckIn) -> Result<CheckIn, RepositoryError>;

    async fn find_by_id(&self, id: CheckInId) -> Result<Option<CheckIn>, RepositoryError>;

    /// 查找用户在 `date` 所在 UTC 自然日内的打卡。
    async fn find_by_user_id_on_date(
        &self,
        user_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<Option<CheckIn>, RepositoryError>;

    /// 用户的打卡历史，按创建时间升序分页。
    async fn find_many_by_user_id(
        &self,
        user_id: UserId,
        pagination: Pagination,
    ) -> Result<Vec<CheckIn>, RepositoryError>;

    async fn count_by_user_id(&self, user_id: UserId) -> Result<u64, RepositoryError>;
}
