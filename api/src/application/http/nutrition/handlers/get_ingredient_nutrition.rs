use axum::extract::{Path, State};
use larder_core::domain::{
    ingredient::ports::IngredientRepository, nutrition::entities::NutrientRecord,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct IngredientNutritionResponse {
    pub ingredient_id: Uuid,
    pub ingredient_name: String,
    /// All-zero when the ingredient carries no nutrition record.
    pub per_100g: NutrientRecord,
}

#[utoipa::path(
    get,
    path = "/ingredients/{ingredient_id}",
    tag = "nutrition",
    summary = "Nutrition of one ingredient per 100 g",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 200, body = IngredientNutritionResponse),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn get_ingredient_nutrition(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<IngredientNutritionResponse>, ApiError> {
    let ingredient = state
        .ingredient_repository
        .get_any(ingredient_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Ingredient not found".to_string()))?;

    Ok(Response::OK(IngredientNutritionResponse {
        ingredient_id: ingredient.id,
        ingredient_name: ingredient.name,
        per_100g: ingredient.nutrition_per_100g.unwrap_or_default(),
    }))
}
