use axum::extract::{Path, Query, State};
use larder_core::domain::{
    nutrition::{
        entities::{NutrientRecord, RecipeNutrition},
        ports::NutritionRepository,
        services::{calculate_recipe_nutrition, recipe_nutrition_breakdown},
    },
    recipe::ports::RecipeRepository,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    nutrition::validators::RecipeNutritionParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeNutritionResponse {
    pub recipe_id: Uuid,
    pub recipe_title: String,
    pub servings: i32,
    /// Totals rescaled to the requested servings.
    pub requested: NutrientRecord,
    #[serde(flatten)]
    pub breakdown: RecipeNutrition,
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    tag = "nutrition",
    summary = "Nutrition of one recipe, total and per serving",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
        RecipeNutritionParams,
    ),
    responses(
        (status = 200, body = RecipeNutritionResponse),
        (status = 400, description = "Non-positive servings"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe_nutrition(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Query(params): Query<RecipeNutritionParams>,
) -> Result<Response<RecipeNutritionResponse>, ApiError> {
    if let Some(servings) = params.servings
        && servings <= 0
    {
        return Err(ApiError::BadRequest(
            "Servings must be positive".to_string(),
        ));
    }

    // Unauthenticated route: private recipes are indistinguishable from absent.
    let recipe = state
        .recipe_repository
        .get_by_id(recipe_id)
        .await
        .map_err(ApiError::from)?
        .filter(|r| r.is_public)
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    let usages = state
        .nutrition_repository
        .recipe_usages(recipe_id)
        .await
        .map_err(ApiError::from)?;

    let requested_servings = params.servings.unwrap_or(recipe.servings);
    let requested = calculate_recipe_nutrition(&usages, recipe.servings, requested_servings as f64);
    let breakdown = recipe_nutrition_breakdown(&usages, recipe.servings);

    Ok(Response::OK(RecipeNutritionResponse {
        recipe_id: recipe.id,
        recipe_title: recipe.title,
        servings: recipe.servings,
        requested,
        breakdown,
    }))
}
