use std::sync::Arc;

use application::{CheckInService, GymService, UserService};

use crate::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub gym_service: Arc<GymService>,
    pub check_in_service: Arc<CheckInService>,
    pub jwt_service: Arc<JwtService>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        gym_service: Arc<GymService>,
        check_in_service: Arc<CheckInService>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_service,
            gym_service,
            check_in_service,
            jwt_service,
        }
    }
}
