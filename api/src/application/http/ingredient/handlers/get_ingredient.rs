use axum::extract::{Path, State};
use larder_core::domain::ingredient::{entities::Ingredient, ports::IngredientRepository};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Get one ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 200, body = Ingredient),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn get_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Ingredient>, ApiError> {
    let ingredient = state
        .ingredient_repository
        .get_active(ingredient_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Ingredient not found".to_string()))?;

    Ok(Response::OK(ingredient))
}
