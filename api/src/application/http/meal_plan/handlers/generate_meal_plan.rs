use axum::{Json, extract::State};
use larder_core::domain::{
    meal_plan::{
        entities::{MealPlan, MealPlanConfig, MealPlanItem, MealPlanItemConfig},
        ports::MealPlanRepository,
        services::spread_random_recipes,
    },
    recipe::ports::RecipeRepository,
};
use validator::Validate;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::{
        meal_plan::validators::GenerateMealPlanRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/generate",
    tag = "meal_plan",
    summary = "Generate a meal plan from public recipes",
    request_body = GenerateMealPlanRequest,
    responses(
        (status = 201, body = MealPlan),
        (status = 400, description = "Invalid date range or no recipes to draw from"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<GenerateMealPlanRequest>,
) -> Result<Response<MealPlan>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    if request.start_date > request.end_date {
        return Err(ApiError::BadRequest(
            "Start date must not be after end date".to_string(),
        ));
    }

    let user = require_active_user(&state, user_id).await?;

    let recipe_ids = state
        .recipe_repository
        .public_recipe_ids()
        .await
        .map_err(ApiError::from)?;

    if recipe_ids.is_empty() {
        return Err(ApiError::BadRequest(
            "No public recipes to draw from".to_string(),
        ));
    }

    let plan = MealPlan::new(MealPlanConfig {
        user_id: user.id,
        name: request.name,
        description: None,
        start_date: request.start_date,
        end_date: request.end_date,
        nutrition_targets: request.nutrition_targets,
        is_generated: true,
    });

    let items = spread_random_recipes(&recipe_ids, request.start_date, request.end_date)
        .into_iter()
        .map(|slot| {
            MealPlanItem::new(MealPlanItemConfig {
                meal_plan_id: plan.id,
                recipe_id: slot.recipe_id,
                planned_date: slot.planned_date,
                meal_type: slot.meal_type,
                servings: 1.0,
                notes: None,
            })
        })
        .collect();

    let created = state
        .meal_plan_repository
        .create_plan(plan, items)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
