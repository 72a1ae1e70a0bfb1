//! 打卡记录实体定义

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::business_rules::CheckInRules;
use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CheckInId, GymId, UserId};

/// 打卡记录实体
///
/// `validated_at` 最多只会被写入一次，超过校验时限后保持为空。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckIn {
    /// 打卡唯一ID
    pub id: CheckInId,
    /// 打卡用户
    pub user_id: UserId,
    /// 打卡健身房
    pub gym_id: GymId,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 校验时间（未校验时为空）
    pub validated_at: Option<DateTime<Utc>>,
}

impl CheckIn {
    /// 记录一次新的打卡，时间由调用方注入。
    pub fn record(user_id: UserId, gym_id: GymId, now: DateTime<Utc>) -> Self {
        Self {
            id: CheckInId::new(Uuid::new_v4()),
            user_id,
            gym_id,
            created_at: now,
            validated_at: None,
        }
    }

    pub fn is_validated(&self) -> bool {
        self.validated_at.is_some()
    }

    /// 校验打卡。
    ///
    /// 已校验过的打卡不能重复校验；创建超过时限的打卡拒绝校验。
    pub fn validate(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.is_validated() {
            return Err(DomainError::CheckInAlreadyValidated);
        }
        CheckInRules::ensure_validation_on_time(self.created_at, now)?;

        self.validated_at = Some(now);
        Ok(())
    }
}
