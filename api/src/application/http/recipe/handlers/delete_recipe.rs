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
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Delete a recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 403, description = "Only the author may delete a recipe"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn delete_recipe(
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

    if recipe.author_id != user_id {
        return Err(ApiError::Forbidden(
            "Only the author may delete a recipe".to_string(),
        ));
    }

    state
        .recipe_repository
        .delete_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
