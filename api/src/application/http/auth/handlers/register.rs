use axum::{Json, extract::State};
use larder_core::domain::{
    auth::services::hash_password,
    user::{
        entities::{User, UserConfig},
        ports::UserRepository,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    auth::validators::RegisterRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user: User,
    pub access_token: String,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register a new account",
    request_body = RegisterRequest,
    responses(
        (status = 201, body = RegisterResponse, description = "Account created"),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response<RegisterResponse>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    if state
        .user_repository
        .username_exists(request.username.clone())
        .await
        .map_err(ApiError::from)?
    {
        return Err(ApiError::Conflict("Username already taken".to_string()));
    }

    if state
        .user_repository
        .email_exists(request.email.clone())
        .await
        .map_err(ApiError::from)?
    {
        return Err(ApiError::Conflict("Email already taken".to_string()));
    }

    let password_hash = hash_password(&request.password).map_err(ApiError::from)?;

    let user = User::new(UserConfig {
        username: request.username,
        email: request.email,
        password_hash,
        name: request.name,
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

    let created = state
        .user_repository
        .create_user(user)
        .await
        .map_err(ApiError::from)?;

    let access_token = state.token_service.issue(created.id).map_err(ApiError::from)?;

    Ok(Response::Created(RegisterResponse {
        user: created,
        access_token,
    }))
}
