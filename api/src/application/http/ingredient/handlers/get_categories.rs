use axum::extract::State;
use larder_core::domain::ingredient::ports::IngredientRepository;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    tag = "ingredient",
    summary = "List distinct ingredient categories",
    responses(
        (status = 200, body = Vec<String>)
    )
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Response<Vec<String>>, ApiError> {
    let categories = state
        .ingredient_repository
        .categories()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(categories))
}
