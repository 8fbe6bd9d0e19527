use axum::extract::{Path, State};
use larder_core::domain::ingredient::ports::StockRepository;
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
    path = "/my-stock/{stock_id}",
    tag = "ingredient",
    summary = "Delete an ingredient stock",
    params(
        ("stock_id" = Uuid, Path, description = "Stock id"),
    ),
    responses(
        (status = 204, description = "Stock deleted"),
        (status = 404, description = "Stock not found")
    )
)]
pub async fn delete_stock(
    Path(stock_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<()>, ApiError> {
    state
        .stock_repository
        .get_stock(stock_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Stock not found".to_string()))?;

    state
        .stock_repository
        .delete_stock(stock_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
