use axum::extract::{Query, State};
use larder_core::domain::ingredient::{entities::Ingredient, ports::IngredientRepository};

use crate::application::http::{
    ingredient::validators::SearchIngredientsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

const DEFAULT_SEARCH_LIMIT: u64 = 20;
const MAX_SEARCH_LIMIT: u64 = 100;

#[utoipa::path(
    get,
    path = "/search",
    tag = "ingredient",
    summary = "Search ingredients by name",
    params(SearchIngredientsParams),
    responses(
        (status = 200, body = Vec<Ingredient>),
        (status = 400, description = "Empty query")
    )
)]
pub async fn search_ingredients(
    State(state): State<AppState>,
    Query(params): Query<SearchIngredientsParams>,
) -> Result<Response<Vec<Ingredient>>, ApiError> {
    let query = params.q.trim().to_string();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Search query is required".to_string()));
    }

    let limit = params
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);

    let ingredients = state
        .ingredient_repository
        .search(query, limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ingredients))
}
