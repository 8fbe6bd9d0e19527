use axum::extract::{Path, State};
use larder_core::domain::shopping_list::{
    entities::ShoppingList, ports::ShoppingListRepository,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::CurrentUser,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        shopping_list::handlers::ListItemResponse,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ShoppingListDetailResponse {
    #[serde(flatten)]
    pub list: ShoppingList,
    pub items: Vec<ListItemResponse>,
}

#[utoipa::path(
    get,
    path = "/{list_id}",
    tag = "shopping_list",
    summary = "Get one shopping list with its items",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list id"),
    ),
    responses(
        (status = 200, body = ShoppingListDetailResponse),
        (status = 404, description = "Shopping list not found")
    )
)]
pub async fn get_shopping_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<ShoppingListDetailResponse>, ApiError> {
    let list = state
        .shopping_list_repository
        .get_list(list_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Shopping list not found".to_string()))?;

    let items = state
        .shopping_list_repository
        .items_with_ingredients(list_id)
        .await
        .map_err(ApiError::from)?
        .into_iter()
        .map(ListItemResponse::from)
        .collect();

    Ok(Response::OK(ShoppingListDetailResponse { list, items }))
}
