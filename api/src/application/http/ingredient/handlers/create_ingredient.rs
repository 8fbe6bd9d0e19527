use axum::{Json, extract::State};
use larder_core::domain::ingredient::{
    entities::{Ingredient, IngredientConfig},
    ports::IngredientRepository,
};
use validator::Validate;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::{
        ingredient::validators::CreateIngredientRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Create a catalog ingredient",
    request_body = CreateIngredientRequest,
    responses(
        (status = 201, body = Ingredient),
        (status = 409, description = "Ingredient name already exists")
    )
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateIngredientRequest>,
) -> Result<Response<Ingredient>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    require_active_user(&state, user_id).await?;

    if state
        .ingredient_repository
        .find_by_name(request.name.clone())
        .await
        .map_err(ApiError::from)?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "Ingredient name already exists".to_string(),
        ));
    }

    let ingredient = Ingredient::new(IngredientConfig {
        name: request.name,
        category: request.category,
        unit: request.unit,
        nutrition_per_100g: request.nutrition_per_100g,
        storage_method: request.storage_method,
        shelf_life_days: request.shelf_life_days,
        description: request.description,
        image: request.image,
    });

    let created = state
        .ingredient_repository
        .create_ingredient(ingredient)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
