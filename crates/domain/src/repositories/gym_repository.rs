//! 健身房Repository接口定义

use async_trait::async_trait;

use crate::entities::Gym;
use crate::errors::RepositoryError;
use crate::repositories::Pagination;
use crate::value_objects::{Coordinates, GymId};

/// 健身房Repository接口
#[async_trait]
pub trait GymRepository: Send + Sync {
    async fn create(&self, gym: Gym) -> Result<Gym, RepositoryError>;

    async fn find_by_id(&self, id: GymId) -> Result<Option<Gym>, RepositoryError>;

    /// 按名称子串搜索（不区分大小写），分页返回。
    async fn search_many(
        &self,
        query: &str,
        pagination: Pagination,
    ) -> Result<Vec<Gym>, RepositoryError>;

    /// 返回以 `origin` 为圆心、搜索半径内的所有健身房。
    async fn find_many_nearby(&self, origin: Coordinates) -> Result<Vec<Gym>, RepositoryError>;
}
