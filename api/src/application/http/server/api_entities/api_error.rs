use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larder_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
    status: u16,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", msg.clone()),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", msg.clone())
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "E_FORBIDDEN", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "E_CONFLICT", msg.clone()),
            ApiError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_INTERNAL_SERVER_ERROR",
                msg.clone(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = ErrorBody {
            code: code.to_string(),
            message,
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Forbidden => ApiError::Forbidden("Access denied".to_string()),
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            CoreError::AccountDisabled => ApiError::Unauthorized("Account is disabled".to_string()),
            CoreError::InvalidToken => ApiError::Unauthorized("Invalid token".to_string()),
            CoreError::TokenExpired => ApiError::Unauthorized("Token expired".to_string()),
            CoreError::Validation(msg) => ApiError::BadRequest(msg),
            CoreError::Conflict(msg) => ApiError::Conflict(msg),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::Forbidden, StatusCode::FORBIDDEN),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::TokenExpired, StatusCode::UNAUTHORIZED),
            (
                CoreError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::Conflict("dup".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, status) in cases {
            let (got, _, _) = ApiError::from(core).parts();
            assert_eq!(got, status);
        }
    }
}
