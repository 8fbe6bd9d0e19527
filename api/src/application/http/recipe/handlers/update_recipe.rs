use axum::{
    Json,
    extract::{Path, State},
};
use larder_core::domain::recipe::{
    entities::{Recipe, RecipeUpdate},
    ports::RecipeRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::CurrentUser,
    http::{
        recipe::{
            handlers::create_recipe::{build_ingredients, build_steps, check_ingredients_exist},
            validators::UpdateRecipeRequest,
        },
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update a recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, body = Recipe),
        (status = 403, description = "Only the author may update a recipe"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<UpdateRecipeRequest>,
) -> Result<Response<Recipe>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let mut recipe = state
        .recipe_repository
        .get_by_id(recipe_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    if recipe.author_id != user_id {
        return Err(ApiError::Forbidden(
            "Only the author may update a recipe".to_string(),
        ));
    }

    if let Some(ref inputs) = request.ingredients {
        check_ingredients_exist(&state, inputs).await?;
    }

    recipe.apply_update(RecipeUpdate {
        title: request.title,
        description: request.description,
        category: request.category,
        cuisine: request.cuisine,
        difficulty: request.difficulty,
        prep_time_minutes: request.prep_time_minutes,
        cook_time_minutes: request.cook_time_minutes,
        servings: request.servings,
        images: request.images,
        is_public: request.is_public,
    });

    let ingredients = request.ingredients.map(|i| build_ingredients(recipe_id, i));
    let steps = request.steps.map(|s| build_steps(recipe_id, s));

    let updated = state
        .recipe_repository
        .update_recipe(recipe, ingredients, steps)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(updated))
}
