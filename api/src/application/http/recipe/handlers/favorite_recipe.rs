use axum::extract::{Path, State};
use larder_core::domain::recipe::{entities::RecipeFavorite, ports::RecipeRepository};
use uuid::Uuid;

use crate::application::{
    auth::CurrentUser,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/{recipe_id}/favorite",
    tag = "recipe",
    summary = "Favorite a recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 201, body = RecipeFavorite),
        (status = 404, description = "Recipe not found"),
        (status = 409, description = "Already favorited")
    )
)]
pub async fn favorite_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<RecipeFavorite>, ApiError> {
    let recipe = state
        .recipe_repository
        .get_by_id(recipe_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    if state
        .recipe_repository
        .get_favorite(recipe_id, user_id)
        .await
        .map_err(ApiError::from)?
        .is_some()
    {
        return Err(ApiError::Conflict("Already favorited".to_string()));
    }

    let favorite = state
        .recipe_repository
        .insert_favorite(RecipeFavorite::new(recipe_id, user_id))
        .await
        .map_err(ApiError::from)?;

    state
        .recipe_repository
        .set_favorite_count(recipe_id, recipe.favorite_count + 1)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(favorite))
}
