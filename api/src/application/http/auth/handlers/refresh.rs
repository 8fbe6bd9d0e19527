use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[utoipa::path(
    post,
    path = "/refresh",
    tag = "auth",
    summary = "Issue a fresh access token",
    responses(
        (status = 200, body = RefreshResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn refresh(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<RefreshResponse>, ApiError> {
    let user = require_active_user(&state, user_id).await?;

    let access_token = state.token_service.issue(user.id).map_err(ApiError::from)?;

    Ok(Response::OK(RefreshResponse { access_token }))
}
