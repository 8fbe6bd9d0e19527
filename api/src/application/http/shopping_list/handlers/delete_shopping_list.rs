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
    path = "/{list_id}",
    tag = "shopping_list",
    summary = "Delete a shopping list",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list id"),
    ),
    responses(
        (status = 204, description = "Shopping list deleted"),
        (status = 404, description = "Shopping list not found")
    )
)]
pub async fn delete_shopping_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<()>, ApiError> {
    state
        .shopping_list_repository
        .get_list(list_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Shopping list not found".to_string()))?;

    state
        .shopping_list_repository
        .delete_list(list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
