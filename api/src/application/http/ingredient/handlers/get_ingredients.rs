use axum::extract::{Query, State};
use larder_core::domain::{
    common::value_objects::PageQuery,
    ingredient::{
        entities::Ingredient, ports::IngredientRepository, value_objects::GetIngredientsFilter,
    },
};

use crate::application::http::{
    ingredient::validators::ListIngredientsParams,
    pagination::Paginated,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "List active ingredients",
    params(ListIngredientsParams),
    responses(
        (status = 200, description = "Paginated ingredients, sorted by name")
    )
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    Query(params): Query<ListIngredientsParams>,
) -> Result<Response<Paginated<Ingredient>>, ApiError> {
    let page = PageQuery::new(params.page, params.per_page);

    let filter = GetIngredientsFilter {
        category: params.category,
        search: params.search,
        page,
    };

    let paged = state
        .ingredient_repository
        .fetch_ingredients(filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Paginated::from_paged(paged, &page, |i| i)))
}
