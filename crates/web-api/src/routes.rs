use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use application::services::{
    AuthenticateUserRequest, CheckInRequest, CreateGymRequest, FetchNearbyGymsRequest,
    RegisterUserRequest, SearchGymsRequest,
};
use application::{CheckInDto, GymDto, UserDto};
use domain::{CheckInId, GymId, UserId};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
struct RegisterPayload {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct SessionPayload {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct CreateGymPayload {
    title: String,
    description: Option<String>,
    phone: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct SearchGymsQuery {
    query: String,
    page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct NearbyGymsQuery {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct CheckInPayload {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    page: Option<u32>,
}

#[derive(Debug, Serialize)]
struct UserBody {
    user: UserDto,
}

#[derive(Debug, Serialize)]
struct SessionBody {
    token: String,
}

#[derive(Debug, Serialize)]
struct GymBody {
    gym: GymDto,
}

#[derive(Debug, Serialize)]
struct GymListBody {
    gyms: Vec<GymDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckInBody {
    check_in: CheckInDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckInListBody {
    check_ins: Vec<CheckInDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsBody {
    check_ins_count: u64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", post(register_user))
        .route("/session", post(create_session))
        .route("/me", get(get_profile))
        .route("/gyms", post(create_gym))
        .route("/gyms/search", get(search_gyms))
        .route("/gyms/nearby", get(fetch_nearby_gyms))
        .route("/gyms/{gym_id}/check-ins", post(create_check_in))
        .route("/check-ins/{check_in_id}/validate", patch(validate_check_in))
        .route("/check-ins/history", get(check_in_history))
        .route("/check-ins/metrics", get(check_in_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<UserBody>), ApiError> {
    let user = state
        .user_service
        .register(RegisterUserRequest {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserBody {
            user: UserDto::from(&user),
        }),
    ))
}

async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<SessionPayload>,
) -> Result<Json<SessionBody>, ApiError> {
    let user = state
        .user_service
        .authenticate(AuthenticateUserRequest {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let token = state.jwt_service.issue_token(Uuid::from(user.id))?;

    Ok(Json(SessionBody { token }))
}

async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserBody>, ApiError> {
    let user_id = state.jwt_service.authenticated_user(&headers)?;

    let user = state
        .user_service
        .get_profile(UserId::from(user_id))
        .await?;

    Ok(Json(UserBody {
        user: UserDto::from(&user),
    }))
}

async fn create_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGymPayload>,
) -> Result<(StatusCode, Json<GymBody>), ApiError> {
    state.jwt_service.authenticated_user(&headers)?;

    let gym = state
        .gym_service
        .create_gym(CreateGymRequest {
            title: payload.title,
            description: payload.description,
            phone: payload.phone,
            latitude: payload.latitude,
            longitude: payload.longitude,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(GymBody {
            gym: GymDto::from(&gym),
        }),
    ))
}

async fn search_gyms(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchGymsQuery>,
) -> Result<Json<GymListBody>, ApiError> {
    state.jwt_service.authenticated_user(&headers)?;

    let gyms = state
        .gym_service
        .search_gyms(SearchGymsRequest {
            query: query.query,
            page: query.page.unwrap_or(1),
        })
        .await?;

    Ok(Json(GymListBody {
        gyms: gyms.iter().map(GymDto::from).collect(),
    }))
}

async fn fetch_nearby_gyms(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NearbyGymsQuery>,
) -> Result<Json<GymListBody>, ApiError> {
    state.jwt_service.authenticated_user(&headers)?;

    let gyms = state
        .gym_service
        .fetch_nearby_gyms(FetchNearbyGymsRequest {
            latitude: query.latitude,
            longitude: query.longitude,
        })
        .await?;

    Ok(Json(GymListBody {
        gyms: gyms.iter().map(GymDto::from).collect(),
    }))
}

async fn create_check_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(gym_id): Path<Uuid>,
    Json(payload): Json<CheckInPayload>,
) -> Result<(StatusCode, Json<CheckInBody>), ApiError> {
    // 打卡永远记在令牌对应的用户身上，不接受请求体里的用户 id
    let user_id = state.jwt_service.authenticated_user(&headers)?;

    let check_in = state
        .check_in_service
        .check_in(CheckInRequest {
            user_id: UserId::from(user_id),
            gym_id: GymId::from(gym_id),
            latitude: payload.latitude,
            longitude: payload.longitude,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckInBody {
            check_in: CheckInDto::from(&check_in),
        }),
    ))
}

async fn validate_check_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(check_in_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.jwt_service.authenticated_user(&headers)?;

    state
        .check_in_service
        .validate_check_in(CheckInId::from(check_in_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn check_in_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<CheckInListBody>, ApiError> {
    let user_id = state.jwt_service.authenticated_user(&headers)?;

    let check_ins = state
        .check_in_service
        .fetch_user_history(UserId::from(user_id), query.page.unwrap_or(1))
        .await?;

    Ok(Json(CheckInListBody {
        check_ins: check_ins.iter().map(CheckInDto::from).collect(),
    }))
}

async fn check_in_metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MetricsBody>, ApiError> {
    let user_id = state.jwt_service.authenticated_user(&headers)?;

    let count = state
        .check_in_service
        .get_user_metrics(UserId::from(user_id))
        .await?;

    Ok(Json(MetricsBody {
        check_ins_count: count,
    }))
}
