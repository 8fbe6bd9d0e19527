use axum::extract::{Query, State};
use larder_core::domain::{
    common::value_objects::PageQuery,
    shopping_list::{
        entities::ShoppingList, ports::ShoppingListRepository,
        value_objects::GetShoppingListsFilter,
    },
};

use crate::application::{
    auth::CurrentUser,
    http::{
        pagination::Paginated,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        shopping_list::validators::ListShoppingListsParams,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "shopping_list",
    summary = "List the current user's shopping lists",
    params(ListShoppingListsParams),
    responses(
        (status = 200, description = "Paginated shopping lists, most recent first"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_shopping_lists(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(params): Query<ListShoppingListsParams>,
) -> Result<Response<Paginated<ShoppingList>>, ApiError> {
    let page = PageQuery::new(params.page, params.per_page);

    let filter = GetShoppingListsFilter {
        status: params.status,
        page,
    };

    let paged = state
        .shopping_list_repository
        .fetch_lists(user_id, filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Paginated::from_paged(paged, &page, |l| l)))
}
