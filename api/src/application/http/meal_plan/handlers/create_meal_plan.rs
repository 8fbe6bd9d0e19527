use axum::{Json, extract::State};
use larder_core::domain::{
    meal_plan::{
        entities::{MealPlan, MealPlanConfig, MealPlanItem, MealPlanItemConfig},
        ports::MealPlanRepository,
    },
    recipe::ports::RecipeRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::{
        meal_plan::validators::{CreateMealPlanRequest, MealPlanItemInput},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

/// Every scheduled recipe must resolve and be visible to the planner.
pub async fn check_recipes_visible(
    state: &AppState,
    user_id: Uuid,
    inputs: &[MealPlanItemInput],
) -> Result<(), ApiError> {
    for input in inputs {
        let recipe = state
            .recipe_repository
            .get_by_id(input.recipe_id)
            .await
            .map_err(ApiError::from)?;

        match recipe {
            Some(recipe) if recipe.is_public || recipe.author_id == user_id => {}
            _ => {
                return Err(ApiError::BadRequest(format!(
                    "Unknown recipe: {}",
                    input.recipe_id
                )));
            }
        }
    }

    Ok(())
}

pub fn build_items(plan_id: Uuid, inputs: Vec<MealPlanItemInput>) -> Vec<MealPlanItem> {
    inputs
        .into_iter()
        .map(|input| {
            MealPlanItem::new(MealPlanItemConfig {
                meal_plan_id: plan_id,
                recipe_id: input.recipe_id,
                planned_date: input.planned_date,
                meal_type: input.meal_type,
                servings: input.servings,
                notes: input.notes,
            })
        })
        .collect()
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal_plan",
    summary = "Create a meal plan",
    request_body = CreateMealPlanRequest,
    responses(
        (status = 201, body = MealPlan),
        (status = 400, description = "Invalid date range or unknown recipe"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_meal_plan(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateMealPlanRequest>,
) -> Result<Response<MealPlan>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    if request.start_date > request.end_date {
        return Err(ApiError::BadRequest(
            "Start date must not be after end date".to_string(),
        ));
    }

    let user = require_active_user(&state, user_id).await?;

    check_recipes_visible(&state, user.id, &request.items).await?;

    let plan = MealPlan::new(MealPlanConfig {
        user_id: user.id,
        name: request.name,
        description: request.description,
        start_date: request.start_date,
        end_date: request.end_date,
        nutrition_targets: request.nutrition_targets,
        is_generated: false,
    });

    let items = build_items(plan.id, request.items);

    let created = state
        .meal_plan_repository
        .create_plan(plan, items)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
