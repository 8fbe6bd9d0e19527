use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_shopping_list::{__path_create_shopping_list, create_shopping_list},
    create_shopping_list_item::{__path_create_shopping_list_item, create_shopping_list_item},
    delete_shopping_list::{__path_delete_shopping_list, delete_shopping_list},
    delete_shopping_list_item::{__path_delete_shopping_list_item, delete_shopping_list_item},
    export_shopping_list::{__path_export_shopping_list, export_shopping_list},
    generate_from_meal_plan::{__path_generate_from_meal_plan, generate_from_meal_plan},
    get_shopping_list::{__path_get_shopping_list, get_shopping_list},
    get_shopping_lists::{__path_get_shopping_lists, get_shopping_lists},
    update_shopping_list::{__path_update_shopping_list, update_shopping_list},
    update_shopping_list_item::{__path_update_shopping_list_item, update_shopping_list_item},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_shopping_lists,
    create_shopping_list,
    generate_from_meal_plan,
    get_shopping_list,
    update_shopping_list,
    delete_shopping_list,
    export_shopping_list,
    create_shopping_list_item,
    update_shopping_list_item,
    delete_shopping_list_item
))]
pub struct ShoppingListApiDoc;

pub fn shopping_list_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/shopping-lists"),
            get(get_shopping_lists).post(create_shopping_list),
        )
        .route(
            &format!("{root_path}/shopping-lists/generate-from-meal-plan"),
            post(generate_from_meal_plan),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}"),
            get(get_shopping_list)
                .put(update_shopping_list)
                .delete(delete_shopping_list),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}/export"),
            get(export_shopping_list),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}/items"),
            post(create_shopping_list_item),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}/items/{{item_id}}"),
            put(update_shopping_list_item).delete(delete_shopping_list_item),
        )
}
