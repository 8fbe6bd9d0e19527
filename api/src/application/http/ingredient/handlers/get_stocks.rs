use axum::extract::{Query, State};
use larder_core::domain::{
    common::value_objects::PageQuery,
    ingredient::{ports::StockRepository, value_objects::GetStocksFilter},
};

use crate::application::{
    auth::CurrentUser,
    http::{
        ingredient::{handlers::StockResponse, validators::ListStocksParams},
        pagination::Paginated,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "/my-stock",
    tag = "ingredient",
    summary = "List the current user's ingredient stocks",
    params(ListStocksParams),
    responses(
        (status = 200, description = "Paginated stocks with catalog ingredients"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_stocks(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(params): Query<ListStocksParams>,
) -> Result<Response<Paginated<StockResponse>>, ApiError> {
    let page = PageQuery::new(params.page, params.per_page);

    let filter = GetStocksFilter {
        storage_location: params.storage_location,
        page,
    };

    let paged = state
        .stock_repository
        .fetch_stocks(user_id, filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Paginated::from_paged(
        paged,
        &page,
        StockResponse::from,
    )))
}
