#![allow(dead_code)]

use std::sync::Arc;

use application::{
    services::{
        CheckInService, CheckInServiceDependencies, GymService, GymServiceDependencies,
        UserService, UserServiceDependencies,
    },
    FixedClock, InMemoryCheckInRepository, InMemoryGymRepository, InMemoryUserRepository,
    PasswordHasher, PasswordHasherError,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use domain::PasswordHash;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;
use web_api::{router, AppState, JwtConfig, JwtService};

/// 明文“哈希”，只用于测试，避免 bcrypt 拖慢用例
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError> {
        PasswordHash::new(format!("hashed:{plaintext}"))
            .map_err(|err| PasswordHasherError::hash_error(err.to_string()))
    }

    async fn verify(
        &self,
        plaintext: &str,
        hashed: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        Ok(hashed.as_str() == format!("hashed:{plaintext}"))
    }
}

pub struct TestApp {
    pub router: Router,
    pub clock: Arc<FixedClock>,
}

/// 所有路由级测试从 2022-01-20T08:00:00Z 出发
pub fn test_app() -> TestApp {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let gym_repository = Arc::new(InMemoryGymRepository::new());
    let check_in_repository = Arc::new(InMemoryCheckInRepository::new());
    let clock = Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2022, 1, 20, 8, 0, 0).unwrap(),
    ));
    let password_hasher = Arc::new(PlainPasswordHasher);

    let user_service = Arc::new(UserService::new(UserServiceDependencies {
        user_repository,
        password_hasher,
        clock: clock.clone(),
    }));

    let gym_service = Arc::new(GymService::new(GymServiceDependencies {
        gym_repository: gym_repository.clone(),
        clock: clock.clone(),
    }));

    let check_in_service = Arc::new(CheckInService::new(CheckInServiceDependencies {
        check_in_repository,
        gym_repository,
        clock: clock.clone(),
    }));

    let jwt_service = Arc::new(JwtService::new(JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        expiration_hours: 24,
    }));

    let state = AppState::new(user_service, gym_service, check_in_service, jwt_service);

    TestApp {
        router: router(state),
        clock,
    }
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));
    (status, body)
}

pub async fn create_and_authenticate_user(app: &Router) -> String {
    let (status, _) = send_request(
        app,
        Request::builder()
            .method("POST")
            .uri("/users")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "name": "John Doe",
                    "email": "johndoe@example.com",
                    "password": "123456"
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_request(
        app,
        Request::builder()
            .method("POST")
            .uri("/session")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "email": "johndoe@example.com",
                    "password": "123456"
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["token"].as_str().expect("token").to_owned()
}

pub async fn create_gym(
    app: &Router,
    token: &str,
    title: &str,
    latitude: f64,
    longitude: f64,
) -> Uuid {
    let (status, body) = send_request(
        app,
        Request::builder()
            .method("POST")
            .uri("/gyms")
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(
                json!({
                    "title": title,
                    "description": "Some description",
                    "phone": "1188118818",
                    "latitude": latitude,
                    "longitude": longitude
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["gym"]["id"].as_str().expect("gym id").parse().unwrap()
}
