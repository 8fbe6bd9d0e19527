use axum::{
    Json,
    extract::{Path, State},
};
use larder_core::domain::ingredient::{
    entities::{Ingredient, IngredientUpdate},
    ports::IngredientRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::CurrentUser,
    http::{
        ingredient::validators::UpdateIngredientRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Update a catalog ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    request_body = UpdateIngredientRequest,
    responses(
        (status = 200, body = Ingredient),
        (status = 404, description = "Ingredient not found"),
        (status = 409, description = "Ingredient name already exists")
    )
)]
pub async fn update_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(_user_id): CurrentUser,
    Json(request): Json<UpdateIngredientRequest>,
) -> Result<Response<Ingredient>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let mut ingredient = state
        .ingredient_repository
        .get_active(ingredient_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Ingredient not found".to_string()))?;

    if let Some(ref name) = request.name
        && *name != ingredient.name
        && state
            .ingredient_repository
            .find_by_name(name.clone())
            .await
            .map_err(ApiError::from)?
            .is_some()
    {
        return Err(ApiError::Conflict(
            "Ingredient name already exists".to_string(),
        ));
    }

    ingredient.apply_update(IngredientUpdate {
        name: request.name,
        category: request.category,
        unit: request.unit,
        nutrition_per_100g: request.nutrition_per_100g,
        storage_method: request.storage_method,
        shelf_life_days: request.shelf_life_days,
        description: request.description,
        image: request.image,
    });

    let updated = state
        .ingredient_repository
        .update_ingredient(ingredient)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(updated))
}
