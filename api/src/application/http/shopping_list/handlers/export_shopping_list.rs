use axum::extract::{Path, State};
use larder_core::domain::shopping_list::{
    ports::ShoppingListRepository, services::build_export, value_objects::ShoppingListExport,
};
use uuid::Uuid;

use crate::application::{
    auth::CurrentUser,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{list_id}/export",
    tag = "shopping_list",
    summary = "Export a shopping list grouped by ingredient category",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list id"),
    ),
    responses(
        (status = 200, body = ShoppingListExport),
        (status = 404, description = "Shopping list not found")
    )
)]
pub async fn export_shopping_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<ShoppingListExport>, ApiError> {
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
        .map_err(ApiError::from)?;

    Ok(Response::OK(build_export(&list, &items)))
}
