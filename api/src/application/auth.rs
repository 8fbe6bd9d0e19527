use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use larder_core::domain::user::{entities::User, ports::UserRepository};
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Authenticated caller, resolved from the bearer token.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthorized("Missing bearer token".to_string()))?;

        let claims = state
            .token_service
            .verify(bearer.token())
            .map_err(ApiError::from)?;

        Ok(CurrentUser(claims.sub))
    }
}

/// Routes open to anonymous callers still honor a token when one is sent.
/// No header means no caller; a present but invalid token is still rejected.
impl OptionalFromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if parts.headers.get(axum::http::header::AUTHORIZATION).is_none() {
            return Ok(None);
        }

        <CurrentUser as FromRequestParts<AppState>>::from_request_parts(parts, state)
            .await
            .map(Some)
    }
}

/// Loads the caller's user row, rejecting unknown or deactivated accounts.
pub async fn require_active_user(state: &AppState, user_id: Uuid) -> Result<User, ApiError> {
    let user = state
        .user_repository
        .get_by_id(user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::Unauthorized("Unknown user".to_string()))?;

    if !user.is_active {
        return Err(ApiError::Unauthorized("Account is disabled".to_string()));
    }

    Ok(user)
}
