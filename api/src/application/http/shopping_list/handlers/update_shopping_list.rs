use axum::{
    Json,
    extract::{Path, State},
};
use larder_core::domain::shopping_list::{
    entities::{ShoppingList, ShoppingListUpdate},
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
        shopping_list::validators::UpdateShoppingListRequest,
    },
};

#[utoipa::path(
    put,
    path = "/{list_id}",
    tag = "shopping_list",
    summary = "Update a shopping list",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list id"),
    ),
    request_body = UpdateShoppingListRequest,
    responses(
        (status = 200, body = ShoppingList),
        (status = 404, description = "Shopping list not found")
    )
)]
pub async fn update_shopping_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<UpdateShoppingListRequest>,
) -> Result<Response<ShoppingList>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let mut list = state
        .shopping_list_repository
        .get_list(list_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Shopping list not found".to_string()))?;

    list.apply_update(ShoppingListUpdate {
        name: request.name,
        description: request.description,
        status: request.status,
    });

    let updated = state
        .shopping_list_repository
        .update_list(list)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(updated))
}
