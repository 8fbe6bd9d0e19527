use utoipa::OpenApi;

use crate::application::http::{
    auth::router::AuthApiDoc, ingredient::router::IngredientApiDoc,
    meal_plan::router::MealPlanApiDoc, nutrition::router::NutritionApiDoc,
    recipe::router::RecipeApiDoc, shopping_list::router::ShoppingListApiDoc,
    user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    ),
    nest(
        (path = "/auth", api = AuthApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/meal-plans", api = MealPlanApiDoc),
        (path = "/shopping-lists", api = ShoppingListApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
    )
)]
pub struct ApiDoc;
