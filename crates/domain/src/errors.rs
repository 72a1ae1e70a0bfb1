//! 领域模型错误定义
//!
//! 定义领域层所有可能的错误类型，提供清晰的错误上下文。

use thiserror::Error;

/// 领域模型错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 输入验证错误
    #[error("invalid {field}: {message}")]
    InvalidArgument { field: String, message: String },

    /// 资源不存在错误
    #[error("{resource_type} not found: {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// 打卡位置超出健身房地理围栏
    #[error("check-in rejected: gym is {distance_km:.3} km away")]
    MaxDistanceExceeded { distance_km: f64 },

    /// 当天已经打过卡
    #[error("max number of check-ins reached for the day")]
    MaxCheckInsPerDayExceeded,

    /// 打卡创建后超过校验窗口
    #[error("validation window expired: {elapsed_minutes} minutes since check-in creation")]
    LateValidation { elapsed_minutes: i64 },

    /// 重复校验同一条打卡
    #[error("check-in has already been validated")]
    CheckInAlreadyValidated,
}

impl DomainError {
    /// 创建输入验证错误
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 创建资源不存在错误
    pub fn resource_not_found(
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }
}

/// 领域模型结果类型
pub type DomainResult<T> = Result<T, DomainError>;

/// 仓储层错误，由存储适配器产生
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 唯一约束冲突
    #[error("storage conflict: {message}")]
    Conflict { message: String },

    /// 底层存储故障
    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
