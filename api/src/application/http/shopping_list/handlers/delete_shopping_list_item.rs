use axum::extract::{Path, State};
use larder_core::domain::shopping_list::ports::ShoppingListRepository;
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
    path = "/{list_id}/items/{item_id}",
    tag = "shopping_list",
    summary = "Remove an item from a shopping list",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list id"),
        ("item_id" = Uuid, Path, description = "List item id"),
    ),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "Shopping list or item not found")
    )
)]
pub async fn delete_shopping_list_item(
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<()>, ApiError> {
    state
        .shopping_list_repository
        .get_list(list_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Shopping list not found".to_string()))?;

    let item = state
        .shopping_list_repository
        .get_item(item_id, list_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("List item not found".to_string()))?;

    state
        .shopping_list_repository
        .delete_item(item.id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
