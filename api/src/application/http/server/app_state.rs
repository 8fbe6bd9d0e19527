use std::sync::Arc;

use larder_core::{
    domain::auth::services::TokenService,
    infrastructure::{
        ingredient::repositories::{
            ingredient_repository::PostgresIngredientRepository,
            stock_repository::PostgresStockRepository,
        },
        meal_plan::repositories::meal_plan_repository::PostgresMealPlanRepository,
        nutrition::repositories::nutrition_repository::PostgresNutritionRepository,
        recipe::repositories::recipe_repository::PostgresRecipeRepository,
        shopping_list::repositories::shopping_list_repository::PostgresShoppingListRepository,
        user::repositories::user_repository::PostgresUserRepository,
    },
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub token_service: TokenService,
    pub user_repository: Arc<PostgresUserRepository>,
    pub recipe_repository: Arc<PostgresRecipeRepository>,
    pub ingredient_repository: Arc<PostgresIngredientRepository>,
    pub stock_repository: Arc<PostgresStockRepository>,
    pub meal_plan_repository: Arc<PostgresMealPlanRepository>,
    pub shopping_list_repository: Arc<PostgresShoppingListRepository>,
    pub nutrition_repository: Arc<PostgresNutritionRepository>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        args: Arc<Args>,
        token_service: TokenService,
        user_repository: PostgresUserRepository,
        recipe_repository: PostgresRecipeRepository,
        ingredient_repository: PostgresIngredientRepository,
        stock_repository: PostgresStockRepository,
        meal_plan_repository: PostgresMealPlanRepository,
        shopping_list_repository: PostgresShoppingListRepository,
        nutrition_repository: PostgresNutritionRepository,
    ) -> Self {
        Self {
            args,
            token_service,
            user_repository: Arc::new(user_repository),
            recipe_repository: Arc::new(recipe_repository),
            ingredient_repository: Arc::new(ingredient_repository),
            stock_repository: Arc::new(stock_repository),
            meal_plan_repository: Arc::new(meal_plan_repository),
            shopping_list_repository: Arc::new(shopping_list_repository),
            nutrition_repository: Arc::new(nutrition_repository),
        }
    }
}
