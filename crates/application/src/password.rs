//! 密码哈希抽象。
//!
//! 注册和登录用例只依赖这个 trait，bcrypt 适配器在基础设施层实现，
//! 测试可以换成明文假实现。

use async_trait::async_trait;
use domain::PasswordHash;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("password hashing failed: {message}")]
    Hash { message: String },
    #[error("password verification failed: {message}")]
    Verify { message: String },
}

impl PasswordHasherError {
    pub fn hash_error(message: impl Into<String>) -> Self {
        Self::Hash {
            message: message.into(),
        }
    }

    pub fn verify_error(message: impl Into<String>) -> Self {
        Self::Verify {
            message: message.into(),
        }
    }
}

/// 密码哈希与校验接口。
///
/// `verify` 返回 `Ok(false)` 表示密码不匹配；`Err` 只用于底层故障。
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError>;

    async fn verify(
        &self,
        plaintext: &str,
        hashed: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}
