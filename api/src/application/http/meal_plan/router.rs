use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_meal_plan::{__path_create_meal_plan, create_meal_plan},
    delete_meal_plan::{__path_delete_meal_plan, delete_meal_plan},
    generate_meal_plan::{__path_generate_meal_plan, generate_meal_plan},
    get_meal_plan::{__path_get_meal_plan, get_meal_plan},
    get_meal_plans::{__path_get_meal_plans, get_meal_plans},
    update_meal_plan::{__path_update_meal_plan, update_meal_plan},
    update_meal_plan_item::{__path_update_meal_plan_item, update_meal_plan_item},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_meal_plans,
    create_meal_plan,
    generate_meal_plan,
    get_meal_plan,
    update_meal_plan,
    delete_meal_plan,
    update_meal_plan_item
))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/meal-plans"),
            get(get_meal_plans).post(create_meal_plan),
        )
        .route(
            &format!("{root_path}/meal-plans/generate"),
            post(generate_meal_plan),
        )
        .route(
            &format!("{root_path}/meal-plans/{{plan_id}}"),
            get(get_meal_plan)
                .put(update_meal_plan)
                .delete(delete_meal_plan),
        )
        .route(
            &format!("{root_path}/meal-plans/{{plan_id}}/items/{{item_id}}"),
            put(update_meal_plan_item),
        )
}
