use std::collections::HashMap;

use axum::{Json, extract::State};
use larder_core::domain::{
    ingredient::ports::IngredientRepository,
    meal_plan::ports::MealPlanRepository,
    nutrition::entities::round1,
    shopping_list::{
        entities::{
            ShoppingList, ShoppingListConfig, ShoppingListItem, ShoppingListItemConfig,
        },
        ports::ShoppingListRepository,
        services::{MIN_LIST_QUANTITY, aggregate_plan_quantities},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        shopping_list::validators::GenerateFromMealPlanRequest,
    },
};

#[utoipa::path(
    post,
    path = "/generate-from-meal-plan",
    tag = "shopping_list",
    summary = "Generate a shopping list from a meal plan",
    request_body = GenerateFromMealPlanRequest,
    responses(
        (status = 201, body = ShoppingList),
        (status = 400, description = "Plan has nothing to shop for"),
        (status = 404, description = "Meal plan not found")
    )
)]
pub async fn generate_from_meal_plan(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<GenerateFromMealPlanRequest>,
) -> Result<Response<ShoppingList>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let user = require_active_user(&state, user_id).await?;

    let plan = state
        .meal_plan_repository
        .get_plan(request.meal_plan_id, user.id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))?;

    let rows = state
        .shopping_list_repository
        .plan_ingredient_rows(plan.id)
        .await
        .map_err(ApiError::from)?;

    let totals: Vec<(Uuid, f64)> = aggregate_plan_quantities(&rows)
        .into_iter()
        .map(|(id, quantity)| (id, round1(quantity)))
        .filter(|(_, quantity)| *quantity >= MIN_LIST_QUANTITY)
        .collect();

    if totals.is_empty() {
        return Err(ApiError::BadRequest(
            "Meal plan has no ingredients to shop for".to_string(),
        ));
    }

    let ingredients: HashMap<Uuid, String> = state
        .ingredient_repository
        .get_many(totals.iter().map(|(id, _)| *id).collect())
        .await
        .map_err(ApiError::from)?
        .into_iter()
        .map(|i| (i.id, i.unit.unwrap_or_else(|| "g".to_string())))
        .collect();

    let list = ShoppingList::new(ShoppingListConfig {
        user_id: user.id,
        name: request
            .name
            .unwrap_or_else(|| format!("Shopping for {}", plan.name)),
        description: None,
        source_type: "meal_plan".to_string(),
        source_id: Some(plan.id),
    });

    let items = totals
        .into_iter()
        .map(|(ingredient_id, quantity)| {
            ShoppingListItem::new(ShoppingListItemConfig {
                shopping_list_id: list.id,
                ingredient_id,
                quantity,
                unit: ingredients
                    .get(&ingredient_id)
                    .cloned()
                    .unwrap_or_else(|| "g".to_string()),
                estimated_price: None,
                notes: None,
            })
        })
        .collect();

    let created = state
        .shopping_list_repository
        .create_list(list, items)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
