pub mod ingredient_stocks;
pub mod ingredients;
pub mod meal_plan_items;
pub mod meal_plans;
pub mod recipe_favorites;
pub mod recipe_ingredients;
pub mod recipe_ratings;
pub mod recipe_steps;
pub mod recipes;
pub mod shopping_list_items;
pub mod shopping_lists;
pub mod users;
