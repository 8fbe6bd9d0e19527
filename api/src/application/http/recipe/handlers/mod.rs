pub mod create_recipe;
pub mod delete_recipe;
pub mod favorite_recipe;
pub mod get_my_favorites;
pub mod get_my_recipes;
pub mod get_recipe;
pub mod get_recipes;
pub mod rate_recipe;
pub mod unfavorite_recipe;
pub mod update_recipe;
