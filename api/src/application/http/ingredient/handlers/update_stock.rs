use axum::{
    Json,
    extract::{Path, State},
};
use larder_core::domain::ingredient::{entities::IngredientStockUpdate, ports::StockRepository};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::CurrentUser,
    http::{
        ingredient::{handlers::StockResponse, validators::UpdateStockRequest},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/my-stock/{stock_id}",
    tag = "ingredient",
    summary = "Update an ingredient stock",
    params(
        ("stock_id" = Uuid, Path, description = "Stock id"),
    ),
    request_body = UpdateStockRequest,
    responses(
        (status = 200, body = StockResponse),
        (status = 404, description = "Stock not found")
    )
)]
pub async fn update_stock(
    Path(stock_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<UpdateStockRequest>,
) -> Result<Response<StockResponse>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let mut stock = state
        .stock_repository
        .get_stock(stock_id, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Stock not found".to_string()))?;

    stock.apply_update(IngredientStockUpdate {
        quantity: request.quantity,
        unit: request.unit,
        purchase_date: request.purchase_date,
        expiry_date: request.expiry_date,
        storage_location: request.storage_location,
        notes: request.notes,
    });

    let updated = state
        .stock_repository
        .update_stock(stock)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(updated.into()))
}
