use axum::{
    Json,
    extract::{Path, State},
};
use larder_core::domain::meal_plan::{
    entities::{MealPlan, MealPlanUpdate},
    ports::MealPlanRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::CurrentUser,
    http::{
        meal_plan::{
            handlers::create_meal_plan::{build_items, check_recipes_visible},
            validators::UpdateMealPlanRequest,
        },
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/{plan_id}",
    tag = "meal_plan",
    summary = "Update a meal plan",
    params(
        ("plan_id" = Uuid, Path, description = "Meal plan id"),
    ),
    request_body = UpdateMealPlanRequest,
    responses(
        (status = 200, body = MealPlan),
        (status = 400, description = "Invalid date range or unknown recipe"),
        (status = 404, description = "Meal plan not found")
    )
)]
pub async fn update_meal_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<UpdateMealPlanRequest>,
) -> Result<Response<MealPlan>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let mut plan = state
        .meal_plan_repository
        .get_plan(plan_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))?;

    let start = request.start_date.unwrap_or(plan.start_date);
    let end = request.end_date.unwrap_or(plan.end_date);
    if start > end {
        return Err(ApiError::BadRequest(
            "Start date must not be after end date".to_string(),
        ));
    }

    if let Some(ref inputs) = request.items {
        check_recipes_visible(&state, user_id, inputs).await?;
    }

    plan.apply_update(MealPlanUpdate {
        name: request.name,
        description: request.description,
        start_date: request.start_date,
        end_date: request.end_date,
        status: request.status,
        nutrition_targets: request.nutrition_targets,
    });

    let items = request.items.map(|inputs| build_items(plan_id, inputs));

    let updated = state
        .meal_plan_repository
        .update_plan(plan, items)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(updated))
}
