pub mod db;
pub mod ingredient;
pub mod meal_plan;
pub mod nutrition;
pub mod recipe;
pub mod shopping_list;
pub mod user;
