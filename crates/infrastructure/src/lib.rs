//! 基础设施层实现。
//!
//! 提供数据库仓储、密码哈希等适配器，实现领域层定义的接口。

pub mod db;
pub mod password;

pub use db::repositories::{PgCheckInRepository, PgGymRepository, PgUserRepository};
pub use db::{create_pg_pool, PgStorage, MIGRATOR};
pub use password::BcryptPasswordHasher;
