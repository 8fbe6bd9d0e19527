use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_ingredient::{__path_create_ingredient, create_ingredient},
    create_stock::{__path_create_stock, create_stock},
    delete_ingredient::{__path_delete_ingredient, delete_ingredient},
    delete_stock::{__path_delete_stock, delete_stock},
    get_categories::{__path_get_categories, get_categories},
    get_expiring_stocks::{__path_get_expiring_stocks, get_expiring_stocks},
    get_ingredient::{__path_get_ingredient, get_ingredient},
    get_ingredients::{__path_get_ingredients, get_ingredients},
    get_stocks::{__path_get_stocks, get_stocks},
    search_ingredients::{__path_search_ingredients, search_ingredients},
    update_ingredient::{__path_update_ingredient, update_ingredient},
    update_stock::{__path_update_stock, update_stock},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_ingredients,
    create_ingredient,
    get_categories,
    search_ingredients,
    get_stocks,
    create_stock,
    get_expiring_stocks,
    update_stock,
    delete_stock,
    get_ingredient,
    update_ingredient,
    delete_ingredient
))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/ingredients"),
            get(get_ingredients).post(create_ingredient),
        )
        .route(
            &format!("{root_path}/ingredients/categories"),
            get(get_categories),
        )
        .route(
            &format!("{root_path}/ingredients/search"),
            get(search_ingredients),
        )
        .route(
            &format!("{root_path}/ingredients/my-stock"),
            get(get_stocks).post(create_stock),
        )
        .route(
            &format!("{root_path}/ingredients/expiring-soon"),
            get(get_expiring_stocks),
        )
        .route(
            &format!("{root_path}/ingredients/my-stock/{{stock_id}}"),
            put(update_stock).delete(delete_stock),
        )
        .route(
            &format!("{root_path}/ingredients/{{ingredient_id}}"),
            get(get_ingredient)
                .put(update_ingredient)
                .delete(delete_ingredient),
        )
}
