use axum::extract::{Query, State};
use larder_core::domain::ingredient::ports::StockRepository;

use crate::application::{
    auth::CurrentUser,
    http::{
        ingredient::{handlers::StockResponse, validators::ExpiringStocksParams},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

const DEFAULT_EXPIRY_HORIZON_DAYS: i64 = 7;

#[utoipa::path(
    get,
    path = "/expiring-soon",
    tag = "ingredient",
    summary = "List stocks expiring soon",
    params(ExpiringStocksParams),
    responses(
        (status = 200, description = "Stocks expiring within the horizon, soonest first"),
        (status = 400, description = "Invalid horizon")
    )
)]
pub async fn get_expiring_stocks(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(params): Query<ExpiringStocksParams>,
) -> Result<Response<Vec<StockResponse>>, ApiError> {
    let days = params.days.unwrap_or(DEFAULT_EXPIRY_HORIZON_DAYS);
    if days < 0 {
        return Err(ApiError::BadRequest(
            "Horizon must be zero or more days".to_string(),
        ));
    }

    let stocks = state
        .stock_repository
        .expiring_soon(user_id, days)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        stocks.into_iter().map(StockResponse::from).collect(),
    ))
}
