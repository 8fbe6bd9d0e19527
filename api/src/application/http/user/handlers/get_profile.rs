use axum::extract::State;
use larder_core::domain::user::entities::User;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/profile",
    tag = "user",
    summary = "Get the caller's profile",
    responses(
        (status = 200, body = User),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<User>, ApiError> {
    let user = require_active_user(&state, user_id).await?;

    Ok(Response::OK(user))
}
