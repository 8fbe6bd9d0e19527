use axum::extract::{Path, State};
use larder_core::domain::ingredient::ports::IngredientRepository;
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
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Deactivate a catalog ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 204, description = "Ingredient deactivated"),
        (status = 404, description = "Ingredient not found"),
        (status = 409, description = "Ingredient is still referenced")
    )
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(_user_id): CurrentUser,
) -> Result<Response<()>, ApiError> {
    state
        .ingredient_repository
        .get_active(ingredient_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Ingredient not found".to_string()))?;

    let usage = state
        .ingredient_repository
        .usage_counts(ingredient_id)
        .await
        .map_err(ApiError::from)?;

    if usage.is_referenced() {
        return Err(ApiError::Conflict(
            "Ingredient is referenced by recipes or stocks".to_string(),
        ));
    }

    state
        .ingredient_repository
        .soft_delete(ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
