use axum::extract::{Query, State};
use larder_core::domain::{
    common::value_objects::PageQuery,
    recipe::{entities::Recipe, ports::RecipeRepository, value_objects::GetRecipesFilter},
};

use crate::application::http::{
    pagination::Paginated,
    recipe::validators::{ListRecipesParams, parse_sort},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List public recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Paginated public recipes")
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> Result<Response<Paginated<Recipe>>, ApiError> {
    let (sort_by, sort_order) = parse_sort(&params);
    let page = PageQuery::new(params.page, params.per_page);

    let filter = GetRecipesFilter {
        category: params.category,
        cuisine: params.cuisine,
        difficulty: params.difficulty,
        search: params.search,
        sort_by,
        sort_order,
        page,
    };

    let paged = state
        .recipe_repository
        .fetch_recipes(filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Paginated::from_paged(paged, &page, |r| r)))
}
