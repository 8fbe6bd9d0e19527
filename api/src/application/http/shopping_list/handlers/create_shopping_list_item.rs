use axum::{
    Json,
    extract::{Path, State},
};
use larder_core::domain::{
    ingredient::ports::IngredientRepository,
    shopping_list::{
        entities::{ShoppingListItem, ShoppingListItemConfig},
        ports::ShoppingListRepository,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::CurrentUser,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        shopping_list::validators::ShoppingListItemInput,
    },
};

#[utoipa::path(
    post,
    path = "/{list_id}/items",
    tag = "shopping_list",
    summary = "Add an item to a shopping list",
    params(("list_id" = Uuid, Path, description = "Shopping list id")),
    request_body = ShoppingListItemInput,
    responses(
        (status = 201, body = ShoppingListItem),
        (status = 400, description = "Invalid payload or unknown ingredient"),
        (status = 404, description = "Shopping list not found")
    )
)]
pub async fn create_shopping_list_item(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<ShoppingListItemInput>,
) -> Result<Response<ShoppingListItem>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    state
        .shopping_list_repository
        .get_list(list_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Shopping list not found".to_string()))?;

    state
        .ingredient_repository
        .get_active(request.ingredient_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            ApiError::BadRequest(format!("Unknown ingredient: {}", request.ingredient_id))
        })?;

    let item = ShoppingListItem::new(ShoppingListItemConfig {
        shopping_list_id: list_id,
        ingredient_id: request.ingredient_id,
        quantity: request.quantity,
        unit: request.unit,
        estimated_price: request.estimated_price,
        notes: request.notes,
    });

    let created = state
        .shopping_list_repository
        .insert_item(item)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
