use axum::{
    Json,
    extract::{Path, State},
};
use larder_core::domain::shopping_list::{
    entities::{ShoppingListItem, ShoppingListItemUpdate},
    ports::ShoppingListRepository,
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
        shopping_list::validators::UpdateShoppingListItemRequest,
    },
};

#[utoipa::path(
    put,
    path = "/{list_id}/items/{item_id}",
    tag = "shopping_list",
    summary = "Update one shopping list item",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list id"),
        ("item_id" = Uuid, Path, description = "List item id"),
    ),
    request_body = UpdateShoppingListItemRequest,
    responses(
        (status = 200, body = ShoppingListItem),
        (status = 404, description = "Shopping list or item not found")
    )
)]
pub async fn update_shopping_list_item(
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<UpdateShoppingListItemRequest>,
) -> Result<Response<ShoppingListItem>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    state
        .shopping_list_repository
        .get_list(list_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Shopping list not found".to_string()))?;

    let mut item = state
        .shopping_list_repository
        .get_item(item_id, list_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("List item not found".to_string()))?;

    item.apply_update(ShoppingListItemUpdate {
        quantity: request.quantity,
        unit: request.unit,
        is_purchased: request.is_purchased,
        estimated_price: request.estimated_price,
        notes: request.notes,
    });

    let updated = state
        .shopping_list_repository
        .update_item(item)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(updated))
}
