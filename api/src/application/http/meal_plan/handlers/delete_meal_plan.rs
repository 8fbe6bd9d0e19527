use axum::extract::{Path, State};
use larder_core::domain::meal_plan::ports::MealPlanRepository;
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
    path = "/{plan_id}",
    tag = "meal_plan",
    summary = "Delete a meal plan",
    params(
        ("plan_id" = Uuid, Path, description = "Meal plan id"),
    ),
    responses(
        (status = 204, description = "Meal plan deleted"),
        (status = 404, description = "Meal plan not found")
    )
)]
pub async fn delete_meal_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<()>, ApiError> {
    state
        .meal_plan_repository
        .get_plan(plan_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))?;

    state
        .meal_plan_repository
        .delete_plan(plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
