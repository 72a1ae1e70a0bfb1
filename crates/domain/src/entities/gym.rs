//! 健身房实体定义

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{Coordinates, GymId};

/// 健身房实体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gym {
    /// 健身房唯一ID
    pub id: GymId,
    /// 名称
    pub title: String,
    /// 描述（可选）
    pub description: Option<String>,
    /// 联系电话（可选）
    pub phone: Option<String>,
    /// 地理坐标
    pub coordinates: Coordinates,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Gym {
    /// 登记新健身房，时间由调用方注入。
    pub fn register(
        title: impl Into<String>,
        description: Option<String>,
        phone: Option<String>,
        coordinates: Coordinates,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(DomainError::invalid_argument("title", "cannot be empty"));
        }

        Ok(Self {
            id: GymId::new(Uuid::new_v4()),
            title,
            description,
            phone,
            coordinates,
            created_at: now,
        })
    }
}
