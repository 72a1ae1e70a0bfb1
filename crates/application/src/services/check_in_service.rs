use std::sync::Arc;

use domain::{
    CheckIn, CheckInId, CheckInRepository, CheckInRules, Coordinates, DomainError, GymId,
    GymRepository, Pagination, RepositoryError, UserId,
};

use crate::{clock::Clock, error::ApplicationError};

#[derive(Debug, Clone)]
pub struct CheckInRequest {
    pub user_id: UserId,
    pub gym_id: GymId,
    pub latitude: f64,
    pub longitude: f64,
}

pub struct CheckInServiceDependencies {
    pub check_in_repository: Arc<dyn CheckInRepository>,
    pub gym_repository: Arc<dyn GymRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct CheckInService {
    deps: CheckInServiceDependencies,
}

impl CheckInService {
    pub fn new(deps: CheckInServiceDependencies) -> Self {
        Self { deps }
    }

    /// 打卡：健身房必须存在、用户在围栏内、当天尚未打过卡。
    pub async fn check_in(&self, request: CheckInRequest) -> Result<CheckIn, ApplicationError> {
        let user_coordinates = Coordinates::new(request.latitude, request.longitude)?;

        let gym = self
            .deps
            .gym_repository
            .find_by_id(request.gym_id)
            .await?
            .ok_or_else(|| {
                DomainError::resource_not_found("gym", request.gym_id.to_string())
            })?;

        CheckInRules::ensure_within_gym_range(user_coordinates, gym.coordinates)?;

        let now = self.deps.clock.now();
        if self
            .deps
            .check_in_repository
            .find_by_user_id_on_date(request.user_id, now)
            .await?
            .is_some()
        {
            return Err(DomainError::MaxCheckInsPerDayExceeded.into());
        }

        let check_in = CheckIn::record(request.user_id, request.gym_id, now);
        // 并发打卡由存储层唯一约束兜底，两个竞争者看到同一个业务错误
        match self.deps.check_in_repository.create(check_in).await {
            Ok(stored) => Ok(stored),
            Err(RepositoryError::Conflict { .. }) => {
                Err(DomainError::MaxCheckInsPerDayExceeded.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn validate_check_in(
        &self,
        check_in_id: CheckInId,
    ) -> Result<CheckIn, ApplicationError> {
        let mut check_in = self
            .deps
            .check_in_repository
            .find_by_id(check_in_id)
            .await?
            .ok_or_else(|| {
                DomainError::resource_not_found("check-in", check_in_id.to_string())
            })?;

        check_in.validate(self.deps.clock.now())?;

        let stored = self.deps.check_in_repository.save(check_in).await?;
        Ok(stored)
    }

    pub async fn fetch_user_history(
        &self,
        user_id: UserId,
        page: u32,
    ) -> Result<Vec<CheckIn>, ApplicationError> {
        let check_ins = self
            .deps
            .check_in_repository
            .find_many_by_user_id(user_id, Pagination::for_page(page))
            .await?;
        Ok(check_ins)
    }

    pub async fn get_user_metrics(&self, user_id: UserId) -> Result<u64, ApplicationError> {
        let count = self.deps.check_in_repository.count_by_user_id(user_id).await?;
        Ok(count)
    }
}
