use axum::extract::{Path, State};
use larder_core::domain::meal_plan::{entities::MealPlan, ports::MealPlanRepository};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::CurrentUser,
    http::{
        meal_plan::handlers::PlanItemResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct MealPlanDetailResponse {
    #[serde(flatten)]
    pub plan: MealPlan,
    pub items: Vec<PlanItemResponse>,
}

#[utoipa::path(
    get,
    path = "/{plan_id}",
    tag = "meal_plan",
    summary = "Get one meal plan with its items",
    params(
        ("plan_id" = Uuid, Path, description = "Meal plan id"),
    ),
    responses(
        (status = 200, body = MealPlanDetailResponse),
        (status = 404, description = "Meal plan not found")
    )
)]
pub async fn get_meal_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<MealPlanDetailResponse>, ApiError> {
    let plan = state
        .meal_plan_repository
        .get_plan(plan_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))?;

    let items = state
        .meal_plan_repository
        .items_with_recipes(plan_id)
        .await
        .map_err(ApiError::from)?
        .into_iter()
        .map(PlanItemResponse::from)
        .collect();

    Ok(Response::OK(MealPlanDetailResponse { plan, items }))
}
