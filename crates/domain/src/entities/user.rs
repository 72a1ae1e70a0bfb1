//! 用户实体定义

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{PasswordHash, UserEmail, UserId};

/// 用户实体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// 用户唯一ID
    pub id: UserId,
    /// 显示名称
    pub name: String,
    /// 邮箱（唯一）
    pub email: UserEmail,
    /// 密码哈希（敏感信息，不在序列化中包含）
    #[serde(skip_serializing)]
    pub password_hash: PasswordHash,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 注册新用户，时间由调用方注入。
    pub fn register(
        name: impl Into<String>,
        email: UserEmail,
        password_hash: PasswordHash,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(DomainError::invalid_argument("name", "cannot be empty"));
        }

        Ok(Self {
            id: UserId::new(Uuid::new_v4()),
            name,
            email,
            password_hash,
            created_at: now,
        })
    }
}
