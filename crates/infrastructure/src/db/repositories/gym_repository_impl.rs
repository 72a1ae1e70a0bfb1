//! 健身房Repository实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    Coordinates, Gym, GymDiscoveryRules, GymId, GymRepository, Pagination, RepositoryError,
};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{invalid_data, map_sqlx_err};

#[derive(Debug, FromRow)]
struct GymRecord {
    id: Uuid,
    title: String,
    description: Option<String>,
    phone: Option<String>,
    latitude: f64,
    longitude: f64,
    created_at: DateTime<Utc>,
}

impl TryFrom<GymRecord> for Gym {
    type Error = RepositoryError;

    fn try_from(value: GymRecord) -> Result<Self, Self::Error> {
        let coordinates = Coordinates::new(value.latitude, value.longitude)
            .map_err(|err| invalid_data(err.to_string()))?;

        Ok(Gym {
            id: GymId::from(value.id),
            title: value.title,
            description: value.description,
            phone: value.phone,
            coordinates,
            created_at: value.created_at,
        })
    }
}

pub struct PgGymRepository {
    pool: PgPool,
}

impl PgGymRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymRepository for PgGymRepository {
    async fn create(&self, gym: Gym) -> Result<Gym, RepositoryError> {
        let record = sqlx::query_as::<_, GymRecord>(
            r#"INSERT INTO gyms (id, title, description, phone, latitude, longitude, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, title, description, phone, latitude, longitude, created_at"#,
        )
        .bind(Uuid::from(gym.id))
        .bind(&gym.title)
        .bind(&gym.description)
        .bind(&gym.phone)
        .bind(gym.coordinates.latitude())
        .bind(gym.coordinates.longitude())
        .bind(gym.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Gym::try_from(record)
    }

    async fn find_by_id(&self, id: GymId) -> Result<Option<Gym>, RepositoryError> {
        let record = sqlx::query_as::<_, GymRecord>(
            r#"SELECT id, title, description, phone, latitude, longitude, created_at
               FROM gyms WHERE id = $1"#,
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        record.map(Gym::try_from).transpose()
    }

    async fn search_many(
        &self,
        query: &str,
        pagination: Pagination,
    ) -> Result<Vec<Gym>, RepositoryError> {
        let records = sqlx::query_as::<_, GymRecord>(
            r#"SELECT id, title, description, phone, latitude, longitude, created_at
               FROM gyms
               WHERE title ILIKE '%' || $1 || '%'
               ORDER BY created_at ASC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(query)
        .bind(pagination.limit as i64)
        .bind(pagination.offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        records.into_iter().map(Gym::try_from).collect()
    }

    async fn find_many_nearby(&self, origin: Coordinates) -> Result<Vec<Gym>, RepositoryError> {
        // SQL 里的 haversine 与 domain::geo 使用同一公式
        let records = sqlx::query_as::<_, GymRecord>(
            r#"SELECT id, title, description, phone, latitude, longitude, created_at
               FROM (
                   SELECT *,
                          2 * 6371 * asin(sqrt(
                              power(sin(radians(latitude - $1) / 2), 2)
                              + cos(radians($1)) * cos(radians(latitude))
                              * power(sin(radians(longitude - $2) / 2), 2)
                          )) AS distance_km
                   FROM gyms
               ) AS with_distance
               WHERE distance_km <= $3
               ORDER BY distance_km ASC"#,
        )
        .bind(origin.latitude())
        .bind(origin.longitude())
        .bind(GymDiscoveryRules::NEARBY_RADIUS_KM)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        records.into_iter().map(Gym::try_from).collect()
    }
}
