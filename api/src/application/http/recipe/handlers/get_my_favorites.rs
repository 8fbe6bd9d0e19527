use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use larder_core::domain::recipe::{
    entities::Recipe, ports::RecipeRepository, value_objects::FavoriteEntry,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{
    auth::CurrentUser,
    http::{
        pagination::{Paginated, PaginationQuery},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteRecipeResponse {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub favorited_at: DateTime<Utc>,
}

impl From<FavoriteEntry> for FavoriteRecipeResponse {
    fn from(entry: FavoriteEntry) -> Self {
        Self {
            recipe: entry.recipe,
            favorited_at: entry.favorited_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/my-favorites",
    tag = "recipe",
    summary = "List the current user's favorite recipes",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated favorites, most recent first"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_my_favorites(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<PaginationQuery>,
) -> Result<Response<Paginated<FavoriteRecipeResponse>>, ApiError> {
    let page = query.into();

    let paged = state
        .recipe_repository
        .fetch_favorites(user_id, page)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Paginated::from_paged(
        paged,
        &page,
        FavoriteRecipeResponse::from,
    )))
}
