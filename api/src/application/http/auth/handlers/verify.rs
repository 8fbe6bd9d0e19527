use axum::extract::State;
use larder_core::domain::user::entities::User;
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
pub struct VerifyResponse {
    pub user: User,
}

#[utoipa::path(
    get,
    path = "/verify",
    tag = "auth",
    summary = "Verify the current token and return its user",
    responses(
        (status = 200, body = VerifyResponse),
        (status = 401, description = "Token invalid, expired, or user disabled")
    )
)]
pub async fn verify(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<VerifyResponse>, ApiError> {
    let user = require_active_user(&state, user_id).await?;

    Ok(Response::OK(VerifyResponse { user }))
}
