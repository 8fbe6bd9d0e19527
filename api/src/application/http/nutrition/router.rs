use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    analyze_meal_plan::{__path_analyze_meal_plan, analyze_meal_plan},
    get_daily_nutrition::{__path_get_daily_nutrition, get_daily_nutrition},
    get_ingredient_nutrition::{__path_get_ingredient_nutrition, get_ingredient_nutrition},
    get_recipe_nutrition::{__path_get_recipe_nutrition, get_recipe_nutrition},
    get_weekly_nutrition::{__path_get_weekly_nutrition, get_weekly_nutrition},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_ingredient_nutrition,
    get_recipe_nutrition,
    get_daily_nutrition,
    get_weekly_nutrition,
    analyze_meal_plan
))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/nutrition/ingredients/{{ingredient_id}}"),
            get(get_ingredient_nutrition),
        )
        .route(
            &format!("{root_path}/nutrition/recipes/{{recipe_id}}"),
            get(get_recipe_nutrition),
        )
        .route(
            &format!("{root_path}/nutrition/daily/{{date}}"),
            get(get_daily_nutrition),
        )
        .route(
            &format!("{root_path}/nutrition/weekly"),
            get(get_weekly_nutrition),
        )
        .route(
            &format!("{root_path}/nutrition/analyze-meal-plan/{{plan_id}}"),
            get(analyze_meal_plan),
        )
}
