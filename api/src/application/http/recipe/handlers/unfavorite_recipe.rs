use axum::extract::{Path, State};
use larder_core::domain::recipe::ports::RecipeRepository;
use uuid::Uuid;

use crate::application::{
    auth::CurrentUser,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{recipe_id}/favorite",
    tag = "recipe",
    summary = "Remove a recipe from favorites",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 404, description = "Recipe not favorited")
    )
)]
pub async fn unfavorite_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<()>, ApiError> {
    let recipe = state
        .recipe_repository
        .get_by_id(recipe_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    let favorite = state
        .recipe_repository
        .get_favorite(recipe_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Recipe not favorited".to_string()))?;

    state
        .recipe_repository
        .delete_favorite(favorite.id)
        .await
        .map_err(ApiError::from)?;

    state
        .recipe_repository
        .set_favorite_count(recipe_id, (recipe.favorite_count - 1).max(0))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
