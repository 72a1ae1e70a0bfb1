mod check_in_service;
mod gym_service;
mod user_service;

#[cfg(test)]
mod user_service_tests;

pub use check_in_service::{CheckInRequest, CheckInService, CheckInServiceDependencies};
pub use gym_service::{
    CreateGymRequest, FetchNearbyGymsRequest, GymService, GymServiceDependencies,
    SearchGymsRequest,
};
pub use user_service::{
    AuthenticateUserRequest, RegisterUserRequest, UserService, UserServiceDependencies,
};
