use axum::{Json, extract::State};
use larder_core::domain::user::{
    entities::{ProfileUpdate, User},
    ports::UserRepository,
};
use validator::Validate;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        user::validators::UpdateProfileRequest,
    },
};

#[utoipa::path(
    put,
    path = "/profile",
    tag = "user",
    summary = "Update the caller's profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, body = User),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Response<User>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let mut user = require_active_user(&state, user_id).await?;

    user.apply_profile_update(ProfileUpdate {
        name: request.name,
        avatar: request.avatar,
        phone: request.phone,
        birthday: request.birthday,
        gender: request.gender,
        height: request.height,
        weight: request.weight,
        activity_level: request.activity_level,
        dietary_preferences: request.dietary_preferences,
        allergies: request.allergies,
        health_goals: request.health_goals,
    });

    let updated = state
        .user_repository
        .update_user(user)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(updated))
}
