//! 业务规则验证
//!
//! 包含打卡系统的业务规则：地理围栏、校验时限、自然日窗口、
//! 附近健身房搜索半径。

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::Coordinates;

/// 打卡规则验证
pub struct CheckInRules;

impl CheckInRules {
    /// 用户与健身房之间允许的最大距离（公里）。
    pub const MAX_DISTANCE_FROM_GYM_KM: f64 = 0.1;

    /// 打卡创建后允许被校验的时限（分钟）。
    pub const VALIDATION_DEADLINE_MINUTES: i64 = 20;

    /// 验证用户位置是否在健身房围栏内。
    ///
    /// 距离恰好等于上限时仍然允许打卡。
    pub fn ensure_within_gym_range(user: Coordinates, gym: Coordinates) -> DomainResult<()> {
        let distance_km = user.distance_km_to(gym);
        if distance_km > Self::MAX_DISTANCE_FROM_GYM_KM {
            return Err(DomainError::MaxDistanceExceeded { distance_km });
        }
        Ok(())
    }

    /// 验证打卡是否仍在校验窗口内。
    ///
    /// 按整分钟截断比较，创建后 20 分 59 秒的打卡仍可校验。
    pub fn ensure_validation_on_time(
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let elapsed_minutes = now.signed_duration_since(created_at).num_minutes();
        if elapsed_minutes > Self::VALIDATION_DEADLINE_MINUTES {
            return Err(DomainError::LateValidation { elapsed_minutes });
        }
        Ok(())
    }

    /// 计算时间点所在的 UTC 自然日窗口。
    pub fn utc_day_window(at: DateTime<Utc>) -> DayWindow {
        let start = at.date_naive().and_time(NaiveTime::MIN).and_utc();
        DayWindow {
            start,
            end: start + Duration::days(1),
        }
    }
}

/// 半开区间 [start, end)，表示一个 UTC 自然日。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }
}

/// 附近健身房搜索规则
pub struct GymDiscoveryRules;

impl GymDiscoveryRules {
    /// 附近搜索覆盖的半径（公里）。
    pub const NEARBY_RADIUS_KM: f64 = 10.0;

    pub fn is_nearby(origin: Coordinates, gym: Coordinates) -> bool {
        origin.distance_km_to(gym) <= Self::NEARBY_RADIUS_KM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coords(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates::new(latitude, longitude).unwrap()
    }

    #[test]
    fn allows_check_in_at_the_gym_itself() {
        let gym = coords(-16.0781547, -47.9911217);
        assert!(CheckInRules::ensure_within_gym_range(gym, gym).is_ok());
    }

    #[test]
    fn rejects_check_in_kilometers_away() {
        let user = coords(-15.9576531, -47.8946573);
        let gym = coords(-16.0492208, -47.9723605);

        let result = CheckInRules::ensure_within_gym_range(user, gym);
        match result {
            Err(DomainError::MaxDistanceExceeded { distance_km }) => {
                assert!(distance_km > CheckInRules::MAX_DISTANCE_FROM_GYM_KM);
            }
            other => panic!("Expected MaxDistanceExceeded, got {other:?}"),
        }
    }

    #[test]
    fn validation_allowed_up_to_the_deadline() {
        let created_at = Utc.with_ymd_and_hms(2022, 1, 20, 8, 0, 0).unwrap();

        let on_time = created_at + Duration::minutes(20) + Duration::seconds(59);
        assert!(CheckInRules::ensure_validation_on_time(created_at, on_time).is_ok());

        let late = created_at + Duration::minutes(21);
        match CheckInRules::ensure_validation_on_time(created_at, late) {
            Err(DomainError::LateValidation { elapsed_minutes }) => {
                assert_eq!(elapsed_minutes, 21);
            }
            other => panic!("Expected LateValidation, got {other:?}"),
        }
    }

    #[test]
    fn day_window_covers_a_single_utc_day() {
        let at = Utc.with_ymd_and_hms(2022, 1, 20, 8, 0, 0).unwrap();
        let window = CheckInRules::utc_day_window(at);

        assert_eq!(window.start, Utc.with_ymd_and_hms(2022, 1, 20, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2022, 1, 21, 0, 0, 0).unwrap());
        assert!(window.contains(at));
        assert!(!window.contains(window.end));
    }

    #[test]
    fn nearby_radius_separates_near_and_far_gyms() {
        let origin = coords(-16.0781547, -47.9911217);
        assert!(GymDiscoveryRules::is_nearby(origin, coords(-16.0492208, -47.9723605)));
        assert!(!GymDiscoveryRules::is_nearby(origin, coords(-15.9737842, -47.6187439)));
    }
}
