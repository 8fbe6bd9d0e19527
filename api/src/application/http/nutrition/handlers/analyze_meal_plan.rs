use axum::extract::{Path, State};
use larder_core::domain::{
    meal_plan::ports::MealPlanRepository,
    nutrition::{entities::PlanNutritionReport, services::analyze_plan},
};
use uuid::Uuid;

use crate::application::{
    auth::CurrentUser,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/analyze-meal-plan/{plan_id}",
    tag = "nutrition",
    summary = "Analyze a whole meal plan against its targets",
    params(
        ("plan_id" = Uuid, Path, description = "Meal plan id"),
    ),
    responses(
        (status = 200, body = PlanNutritionReport),
        (status = 404, description = "Meal plan not found")
    )
)]
pub async fn analyze_meal_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<PlanNutritionReport>, ApiError> {
    let plan = state
        .meal_plan_repository
        .get_plan(plan_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))?;

    let report = analyze_plan(
        &*state.nutrition_repository,
        plan.id,
        &plan.nutrition_targets,
    )
    .await
    .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
