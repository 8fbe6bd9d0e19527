pub mod auth;
pub mod health;
pub mod ingredient;
pub mod meal_plan;
pub mod nutrition;
pub mod pagination;
pub mod recipe;
pub mod server;
pub mod shopping_list;
pub mod user;
