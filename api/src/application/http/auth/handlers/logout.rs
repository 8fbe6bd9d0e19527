use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::CurrentUser,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use axum::extract::State;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

/// Tokens are stateless; logout just confirms the client should drop its copy.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    summary = "Log out",
    responses(
        (status = 200, body = LogoutResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn logout(
    State(_state): State<AppState>,
    CurrentUser(_user_id): CurrentUser,
) -> Result<Response<LogoutResponse>, ApiError> {
    Ok(Response::OK(LogoutResponse {
        message: "Logged out".to_string(),
    }))
}
