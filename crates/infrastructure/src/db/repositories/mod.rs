//! Repository 的 Postgres 实现

use domain::RepositoryError;

mod check_in_repository_impl;
mod gym_repository_impl;
mod user_repository_impl;

pub use check_in_repository_impl::PgCheckInRepository;
pub use gym_repository_impl::PgGymRepository;
pub use user_repository_impl::PgUserRepository;

pub(crate) fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return RepositoryError::conflict(db_err.to_string());
        }
    }
    RepositoryError::storage(err.to_string())
}

pub(crate) fn invalid_data(message: impl Into<String>) -> RepositoryError {
    RepositoryError::storage(message)
}
