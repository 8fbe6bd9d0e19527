use axum::extract::{Query, State};
use larder_core::domain::recipe::{entities::Recipe, ports::RecipeRepository};

use crate::application::{
    auth::CurrentUser,
    http::{
        pagination::{Paginated, PaginationQuery},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "/my-recipes",
    tag = "recipe",
    summary = "List recipes authored by the current user",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated recipes, private ones included"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_my_recipes(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<PaginationQuery>,
) -> Result<Response<Paginated<Recipe>>, ApiError> {
    let page = query.into();

    let paged = state
        .recipe_repository
        .fetch_by_author(user_id, page)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Paginated::from_paged(paged, &page, |r| r)))
}
