use axum::{Json, extract::State};
use larder_core::domain::{
    auth::services::{hash_password, verify_password},
    user::ports::UserRepository,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        user::validators::ChangePasswordRequest,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordResponse {
    pub message: String,
}

#[utoipa::path(
    put,
    path = "/password",
    tag = "user",
    summary = "Change the caller's password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, body = ChangePasswordResponse),
        (status = 400, description = "New password too weak"),
        (status = 401, description = "Old password does not match")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Response<ChangePasswordResponse>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let mut user = require_active_user(&state, user_id).await?;

    if !verify_password(&request.old_password, &user.password_hash).map_err(ApiError::from)? {
        return Err(ApiError::Unauthorized(
            "Old password does not match".to_string(),
        ));
    }

    let hash = hash_password(&request.new_password).map_err(ApiError::from)?;
    user.set_password_hash(hash);

    state
        .user_repository
        .update_user(user)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChangePasswordResponse {
        message: "Password changed".to_string(),
    }))
}
