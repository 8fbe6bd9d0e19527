use axum::{Json, extract::State};
use larder_core::domain::ingredient::{
    entities::{IngredientStock, IngredientStockConfig},
    ports::{IngredientRepository, StockRepository},
};
use validator::Validate;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::{
        ingredient::{handlers::StockResponse, validators::CreateStockRequest},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/my-stock",
    tag = "ingredient",
    summary = "Add an ingredient stock",
    request_body = CreateStockRequest,
    responses(
        (status = 201, body = StockResponse),
        (status = 400, description = "Unknown ingredient")
    )
)]
pub async fn create_stock(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateStockRequest>,
) -> Result<Response<StockResponse>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let user = require_active_user(&state, user_id).await?;

    state
        .ingredient_repository
        .get_active(request.ingredient_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            ApiError::BadRequest(format!("Unknown ingredient: {}", request.ingredient_id))
        })?;

    let stock = IngredientStock::new(IngredientStockConfig {
        user_id: user.id,
        ingredient_id: request.ingredient_id,
        quantity: request.quantity,
        unit: request.unit,
        purchase_date: request.purchase_date,
        expiry_date: request.expiry_date,
        storage_location: request.storage_location,
        notes: request.notes,
    });

    let created = state
        .stock_repository
        .create_stock(stock)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created.into()))
}
