//! 领域实体定义
//!
//! 包含系统的核心实体：用户、健身房、打卡记录。

pub mod check_in;
pub mod gym;
pub mod user;

// 重新导出核心实体
pub use check_in::CheckIn;
pub use gym::Gym;
pub use user::User;
