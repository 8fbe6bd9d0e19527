use axum::{Json, extract::State};
use larder_core::domain::{
    auth::services::verify_password,
    user::{entities::User, ports::UserRepository},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    auth::validators::LoginRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in with username or email",
    request_body = LoginRequest,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials or disabled account")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response<LoginResponse>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let mut user = state
        .user_repository
        .get_by_username_or_email(request.identifier)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    if !verify_password(&request.password, &user.password_hash).map_err(ApiError::from)? {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    if !user.is_active {
        return Err(ApiError::Unauthorized("Account is disabled".to_string()));
    }

    user.touch_last_login();
    let user = state
        .user_repository
        .update_user(user)
        .await
        .map_err(ApiError::from)?;

    let access_token = state.token_service.issue(user.id).map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse { user, access_token }))
}
