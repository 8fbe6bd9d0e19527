use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeNutritionParams {
    /// Servings to rescale to; defaults to the recipe's own serving count.
    pub servings: Option<i32>,
}
