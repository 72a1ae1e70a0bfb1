//! 健身房打卡系统核心领域模型
//!
//! 包含用户、健身房、打卡记录等核心实体，以及地理围栏、
//! 打卡校验窗口等业务规则。

pub mod business_rules;
pub mod entities;
pub mod errors;
pub mod geo;
pub mod repositories;
pub mod value_objects;

// 重新导出常用类型
pub use business_rules::*;
pub use entities::*;
pub use errors::*;
pub use geo::*;
pub use repositories::*;
pub use value_objects::*;
