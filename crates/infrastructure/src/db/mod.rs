//! 数据库连接、迁移与仓储装配。

use std::sync::Arc;

use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool};

pub mod repositories;

use repositories::{PgCheckInRepository, PgGymRepository, PgUserRepository};

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

pub async fn create_pg_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// 共享同一连接池的全套 Postgres 仓储。
pub struct PgStorage {
    pub pool: PgPool,
    pub user_repository: Arc<PgUserRepository>,
    pub gym_repository: Arc<PgGymRepository>,
    pub check_in_repository: Arc<PgCheckInRepository>,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_repository: Arc::new(PgUserRepository::new(pool.clone())),
            gym_repository: Arc::new(PgGymRepository::new(pool.clone())),
            check_in_repository: Arc::new(PgCheckInRepository::new(pool.clone())),
            pool,
        }
    }
}
