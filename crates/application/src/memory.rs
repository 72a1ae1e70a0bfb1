//! Repository 的内存实现。
//!
//! 与 Postgres 适配器遵循相同契约（邮箱唯一、每用户每自然日
//! 一条打卡），供单元测试和路由级测试使用。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    CheckIn, CheckInId, CheckInRepository, CheckInRules, Coordinates, Gym, GymDiscoveryRules,
    GymId, GymRepository, Pagination, RepositoryError, User, UserEmail, UserId, UserRepository,
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    data: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let mut guard = self.data.write().await;
        if guard
            .values()
            .any(|stored| stored.email == user.email)
        {
            return Err(RepositoryError::conflict(format!(
                "email already registered: {}",
                user.email
            )));
        }
        let stored = user.clone();
        guard.insert(Uuid::from(user.id), user);
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let guard = self.data.read().await;
        Ok(guard.get(&Uuid::from(id)).cloned())
    }

    async fn find_by_email(&self, email: UserEmail) -> Result<Option<User>, RepositoryError> {
        let guard = self.data.read().await;
        Ok(guard.values().find(|user| user.email == email).cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryGymRepository {
    // Vec 保持插入顺序，分页结果与插入序一致
    data: Arc<RwLock<Vec<Gym>>>,
}

impl InMemoryGymRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GymRepository for InMemoryGymRepository {
    async fn create(&self, gym: Gym) -> Result<Gym, RepositoryError> {
        let mut guard = self.data.write().await;
        let stored = gym.clone();
        guard.push(gym);
        Ok(stored)
    }

    async fn find_by_id(&self, id: GymId) -> Result<Option<Gym>, RepositoryError> {
        let guard = self.data.read().await;
        Ok(guard.iter().find(|gym| gym.id == id).cloned())
    }

    async fn search_many(
        &self,
        query: &str,
        pagination: Pagination,
    ) -> Result<Vec<Gym>, RepositoryError> {
        let query = query.to_lowercase();
        let guard = self.data.read().await;
        Ok(guard
            .iter()
            .filter(|gym| gym.title.to_lowercase().contains(&query))
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect())
    }

    async fn find_many_nearby(&self, origin: Coordinates) -> Result<Vec<Gym>, RepositoryError> {
        let guard = self.data.read().await;
        let mut nearby: Vec<Gym> = guard
            .iter()
            .filter(|gym| GymDiscoveryRules::is_nearby(origin, gym.coordinates))
            .cloned()
            .collect();
        nearby.sort_by(|a, b| {
            let da = origin.distance_km_to(a.coordinates);
            let db = origin.distance_km_to(b.coordinates);
            da.total_cmp(&db)
        });
        Ok(nearby)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCheckInRepository {
    data: Arc<RwLock<Vec<CheckIn>>>,
}

impl InMemoryCheckInRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckInRepository {
    async fn create(&self, check_in: CheckIn) -> Result<CheckIn, RepositoryError> {
        let mut guard = self.data.write().await;
        let window = CheckInRules::utc_day_window(check_in.created_at);
        if guard
            .iter()
            .any(|stored| stored.user_id == check_in.user_id && window.contains(stored.created_at))
        {
            return Err(RepositoryError::conflict(format!(
                "user {} already checked in on {}",
                check_in.user_id,
                check_in.created_at.date_naive()
            )));
        }
        let stored = check_in.clone();
        guard.push(check_in);
        Ok(stored)
    }

    async fn save(&self, check_in: CheckIn) -> Result<CheckIn, RepositoryError> {
        let mut guard = self.data.write().await;
        let slot = guard
            .iter_mut()
            .find(|stored| stored.id == check_in.id)
            .ok_or_else(|| {
                RepositoryError::storage(format!("check-in not found: {}", check_in.id))
            })?;
        *slot = check_in.clone();
        Ok(check_in)
    }

    async fn find_by_id(&self, id: CheckInId) -> Result<Option<CheckIn>, RepositoryError> {
        let guard = self.data.read().await;
        Ok(guard.iter().find(|check_in| check_in.id == id).cloned())
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<Option<CheckIn>, RepositoryError> {
        let window = CheckInRules::utc_day_window(date);
        let guard = self.data.read().await;
        Ok(guard
            .iter()
            .find(|check_in| check_in.user_id == user_id && window.contains(check_in.created_at))
            .cloned())
    }

    async fn find_many_by_user_id(
        &self,
        user_id: UserId,
        pagination: Pagination,
    ) -> Result<Vec<CheckIn>, RepositoryError> {
        let guard = self.data.read().await;
        let mut items: Vec<CheckIn> = guard
            .iter()
            .filter(|check_in| check_in.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by_key(|check_in| check_in.created_at);
        Ok(items
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .collect())
    }

    async fn count_by_user_id(&self, user_id: UserId) -> Result<u64, RepositoryError> {
        let guard = self.data.read().await;
        Ok(guard
            .iter()
            .filter(|check_in| check_in.user_id == user_id)
            .count() as u64)
    }
}
