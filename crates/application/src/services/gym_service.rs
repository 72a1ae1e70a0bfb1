use std::sync::Arc;

use domain::{Coordinates, Gym, GymRepository, Pagination};

use crate::{clock::Clock, error::ApplicationError};

#[derive(Debug, Clone)]
pub struct CreateGymRequest {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct SearchGymsRequest {
    pub query: String,
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct FetchNearbyGymsRequest {
    pub latitude: f64,
    pub longitude: f64,
}

pub struct GymServiceDependencies {
    pub gym_repository: Arc<dyn GymRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct GymService {
    deps: GymServiceDependencies,
}

impl GymService {
    pub fn new(deps: GymServiceDependencies) -> Self {
        Self { deps }
    }

    pub async fn create_gym(&self, request: CreateGymRequest) -> Result<Gym, ApplicationError> {
        let coordinates = Coordinates::new(request.latitude, request.longitude)?;

        let gym = Gym::register(
            request.title,
            request.description,
            request.phone,
            coordinates,
            self.deps.clock.now(),
        )?;

        let stored = self.deps.gym_repository.create(gym).await?;
        Ok(stored)
    }

    pub async fn search_gyms(&self, request: SearchGymsRequest) -> Result<Vec<Gym>, ApplicationError> {
        let gyms = self
            .deps
            .gym_repository
            .search_many(&request.query, Pagination::for_page(request.page))
            .await?;
        Ok(gyms)
    }

    pub async fn fetch_nearby_gyms(
        &self,
        request: FetchNearbyGymsRequest,
    ) -> Result<Vec<Gym>, ApplicationError> {
        let origin = Coordinates::new(request.latitude, request.longitude)?;
        let gyms = self.deps.gym_repository.find_many_nearby(origin).await?;
        Ok(gyms)
    }
}
