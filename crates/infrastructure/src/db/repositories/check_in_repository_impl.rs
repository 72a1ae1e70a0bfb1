//! 打卡Repository实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    CheckIn, CheckInId, CheckInRepository, CheckInRules, GymId, Pagination, RepositoryError,
    UserId,
};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::map_sqlx_err;

#[derive(Debug, FromRow)]
struct CheckInRecord {
    id: Uuid,
    user_id: Uuid,
    gym_id: Uuid,
    created_at: DateTime<Utc>,
    validated_at: Option<DateTime<Utc>>,
}

impl From<CheckInRecord> for CheckIn {
    fn from(value: CheckInRecord) -> Self {
        CheckIn {
            id: CheckInId::from(value.id),
            user_id: UserId::from(value.user_id),
            gym_id: GymId::from(value.gym_id),
            created_at: value.created_at,
            validated_at: value.validated_at,
        }
    }
}

pub struct PgCheckInRepository {
    pool: PgPool,
}

impl PgCheckInRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInRepository for PgCheckInRepository {
    /// 同一用户同一 UTC 自然日的第二次插入会撞上
    /// `check_ins_user_id_day_key` 唯一索引，映射为 Conflict。
    async fn create(&self, check_in: CheckIn) -> Result<CheckIn, RepositoryError> {
        let record = sqlx::query_as::<_, CheckInRecord>(
            r#"INSERT INTO check_ins (id, user_id, gym_id, created_at, validated_at)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, user_id, gym_id, created_at, validated_at"#,
        )
        .bind(Uuid::from(check_in.id))
        .bind(Uuid::from(check_in.user_id))
        .bind(Uuid::from(check_in.gym_id))
        .bind(check_in.created_at)
        .bind(check_in.validated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(CheckIn::from(record))
    }

    async fn save(&self, check_in: CheckIn) -> Result<CheckIn, RepositoryError> {
        let record = sqlx::query_as::<_, CheckInRecord>(
            r#"UPDATE check_ins
               SET validated_at = $2
               WHERE id = $1
               RETURNING id, user_id, gym_id, created_at, validated_at"#,
        )
        .bind(Uuid::from(check_in.id))
        .bind(check_in.validated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(CheckIn::from(record))
    }

    async fn find_by_id(&self, id: CheckInId) -> Result<Option<CheckIn>, RepositoryError> {
        let record = sqlx::query_as::<_, CheckInRecord>(
            r#"SELECT id, user_id, gym_id, created_at, validated_at
               FROM check_ins WHERE id = $1"#,
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(record.map(CheckIn::from))
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<Option<CheckIn>, RepositoryError> {
        let window = CheckInRules::utc_day_window(date);
        let record = sqlx::query_as::<_, CheckInRecord>(
            r#"SELECT id, user_id, gym_id, created_at, validated_at
               FROM check_ins
               WHERE user_id = $1 AND created_at >= $2 AND created_at < $3
               LIMIT 1"#,
        )
        .bind(Uuid::from(user_id))
        .bind(window.start)
        .bind(window.end)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(record.map(CheckIn::from))
    }

    async fn find_many_by_user_id(
        &self,
        user_id: UserId,
        pagination: Pagination,
    ) -> Result<Vec<CheckIn>, RepositoryError> {
        let records = sqlx::query_as::<_, CheckInRecord>(
            r#"SELECT id, user_id, gym_id, created_at, validated_at
               FROM check_ins
               WHERE user_id = $1
               ORDER BY created_at ASC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(Uuid::from(user_id))
        .bind(pagination.limit as i64)
        .bind(pagination.offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(records.into_iter().map(CheckIn::from).collect())
    }

    async fn count_by_user_id(&self, user_id: UserId) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM check_ins WHERE user_id = $1"#,
        )
        .bind(Uuid::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(count as u64)
    }
}
