use axum::{
    Json,
    extract::{Path, State},
};
use larder_core::domain::{
    meal_plan::{
        entities::{MealPlanItem, MealPlanItemUpdate},
        ports::MealPlanRepository,
    },
    recipe::ports::RecipeRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::CurrentUser,
    http::{
        meal_plan::validators::UpdateMealPlanItemRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/{plan_id}/items/{item_id}",
    tag = "meal_plan",
    summary = "Update one plan item",
    params(
        ("plan_id" = Uuid, Path, description = "Meal plan id"),
        ("item_id" = Uuid, Path, description = "Plan item id"),
    ),
    request_body = UpdateMealPlanItemRequest,
    responses(
        (status = 200, body = MealPlanItem),
        (status = 404, description = "Meal plan or item not found")
    )
)]
pub async fn update_meal_plan_item(
    Path((plan_id, item_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<UpdateMealPlanItemRequest>,
) -> Result<Response<MealPlanItem>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    state
        .meal_plan_repository
        .get_plan(plan_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))?;

    let mut item = state
        .meal_plan_repository
        .get_item(item_id, plan_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Plan item not found".to_string()))?;

    if let Some(recipe_id) = request.recipe_id {
        let recipe = state
            .recipe_repository
            .get_by_id(recipe_id)
            .await
            .map_err(ApiError::from)?;

        match recipe {
            Some(recipe) if recipe.is_public || recipe.author_id == user_id => {}
            _ => {
                return Err(ApiError::BadRequest(format!("Unknown recipe: {recipe_id}")));
            }
        }
    }

    item.apply_update(MealPlanItemUpdate {
        recipe_id: request.recipe_id,
        planned_date: request.planned_date,
        meal_type: request.meal_type,
        servings: request.servings,
        notes: request.notes,
        is_completed: request.is_completed,
    });

    let updated = state
        .meal_plan_repository
        .update_item(item)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(updated))
}
