//! 应用层实现。
//!
//! 这里提供围绕领域模型的用例服务，处理输入校验，
//! 以及对外部适配器（密码哈希、时钟、存储）的抽象。

pub mod clock;
pub mod dto;
pub mod error;
pub mod memory;
pub mod password;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dto::{CheckInDto, GymDto, UserDto};
pub use error::ApplicationError;
pub use memory::{InMemoryCheckInRepository, InMemoryGymRepository, InMemoryUserRepository};
pub use password::{PasswordHasher, PasswordHasherError};
pub use services::{
    AuthenticateUserRequest, CheckInRequest, CheckInService, CheckInServiceDependencies,
    CreateGymRequest, FetchNearbyGymsRequest, GymService, GymServiceDependencies,
    RegisterUserRequest, SearchGymsRequest, UserService, UserServiceDependencies,
};
