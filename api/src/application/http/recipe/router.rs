use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_recipe::{__path_create_recipe, create_recipe},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    favorite_recipe::{__path_favorite_recipe, favorite_recipe},
    get_my_favorites::{__path_get_my_favorites, get_my_favorites},
    get_my_recipes::{__path_get_my_recipes, get_my_recipes},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipes::{__path_get_recipes, get_recipes},
    rate_recipe::{__path_rate_recipe, rate_recipe},
    unfavorite_recipe::{__path_unfavorite_recipe, unfavorite_recipe},
    update_recipe::{__path_update_recipe, update_recipe},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_recipes,
    create_recipe,
    get_my_recipes,
    get_my_favorites,
    get_recipe,
    update_recipe,
    delete_recipe,
    favorite_recipe,
    unfavorite_recipe,
    rate_recipe
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/recipes"),
            get(get_recipes).post(create_recipe),
        )
        .route(&format!("{root_path}/recipes/my-recipes"), get(get_my_recipes))
        .route(
            &format!("{root_path}/recipes/my-favorites"),
            get(get_my_favorites),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}"),
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}/favorite"),
            post(favorite_recipe).delete(unfavorite_recipe),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}/rate"),
            post(rate_recipe),
        )
}
