use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                code,
                message: message.into(),
            },
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        use application::ApplicationError as AppErr;
        use domain::DomainError;

        match error {
            AppErr::Domain(DomainError::InvalidArgument { field, message }) => ApiError::new(
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                format!("{}: {}", field, message),
            ),
            AppErr::Domain(DomainError::ResourceNotFound {
                resource_type,
                resource_id,
            }) => ApiError::new(
                StatusCode::NOT_FOUND,
                "RESOURCE_NOT_FOUND",
                format!("{} not found: {}", resource_type, resource_id),
            ),
            AppErr::Domain(DomainError::MaxDistanceExceeded { distance_km }) => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "MAX_DISTANCE_EXCEEDED",
                format!("check-in rejected: gym is {distance_km:.3} km away"),
            ),
            AppErr::Domain(DomainError::MaxCheckInsPerDayExceeded) => ApiError::new(
                StatusCode::CONFLICT,
                "MAX_CHECK_INS_REACHED",
                "max number of check-ins reached for the day",
            ),
            AppErr::Domain(DomainError::LateValidation { elapsed_minutes }) => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "LATE_VALIDATION",
                format!("validation window expired: {elapsed_minutes} minutes since check-in creation"),
            ),
            AppErr::Domain(DomainError::CheckInAlreadyValidated) => ApiError::new(
                StatusCode::CONFLICT,
                "CHECK_IN_ALREADY_VALIDATED",
                "check-in has already been validated",
            ),
            AppErr::Repository(repo_err) => match repo_err {
                domain::RepositoryError::Conflict { message } => {
                    ApiError::new(StatusCode::CONFLICT, "CONFLICT", message)
                }
                domain::RepositoryError::Storage { message } => {
                    tracing::error!(error = %message, "storage failure while handling request");
                    ApiError::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DATABASE_ERROR",
                        "internal storage error",
                    )
                }
            },
            AppErr::Password(err) => {
                tracing::error!(error = %err, "password hasher failure");
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PASSWORD_ERROR",
                    "internal password error",
                )
            }
            AppErr::InvalidCredentials => ApiError::new(
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "invalid credentials",
            ),
            AppErr::EmailAlreadyInUse => ApiError::new(
                StatusCode::CONFLICT,
                "EMAIL_ALREADY_IN_USE",
                "e-mail already in use",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
