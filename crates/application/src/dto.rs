//! 对外暴露的数据传输对象。
//!
//! 字段统一使用 camelCase，与移动端约定的线上格式一致。

use chrono::{DateTime, Utc};
use domain::{CheckIn, Gym, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: Uuid::from(user.id),
            name: user.name.clone(),
            email: user.email.as_str().to_owned(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&Gym> for GymDto {
    fn from(gym: &Gym) -> Self {
        Self {
            id: Uuid::from(gym.id),
            title: gym.title.clone(),
            description: gym.description.clone(),
            phone: gym.phone.clone(),
            latitude: gym.coordinates.latitude(),
            longitude: gym.coordinates.longitude(),
            created_at: gym.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

impl From<&CheckIn> for CheckInDto {
    fn from(check_in: &CheckIn) -> Self {
        Self {
            id: Uuid::from(check_in.id),
            user_id: Uuid::from(check_in.user_id),
            gym_id: Uuid::from(check_in.gym_id),
            created_at: check_in.created_at,
            validated_at: check_in.validated_at,
        }
    }
}
