pub mod analyze_meal_plan;
pub mod get_daily_nutrition;
pub mod get_ingredient_nutrition;
pub mod get_recipe_nutrition;
pub mod get_weekly_nutrition;
