use larder_core::domain::recipe::value_objects::{RecipeSort, SortOrder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecipeIngredientInput {
    pub ingredient_id: Uuid,
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,
    #[validate(length(min = 1, max = 30, message = "unit must be between 1 and 30 characters"))]
    pub unit: String,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecipeStepInput {
    #[validate(length(min = 1, message = "instruction must not be empty"))]
    pub instruction: String,
    pub image: Option<String>,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateRecipeRequest {
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    #[validate(range(min = 1, message = "servings must be at least 1"))]
    pub servings: i32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientInput>,
    #[validate(nested)]
    #[serde(default)]
    pub steps: Vec<RecipeStepInput>,
}

fn default_public() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    #[validate(range(min = 1, message = "servings must be at least 1"))]
    pub servings: Option<i32>,
    pub images: Option<Vec<String>>,
    pub is_public: Option<bool>,
    #[validate(nested)]
    pub ingredients: Option<Vec<RecipeIngredientInput>>,
    #[validate(nested)]
    pub steps: Option<Vec<RecipeStepInput>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RateRecipeRequest {
    #[validate(range(min = 1, max = 5, message = "score must be between 1 and 5"))]
    pub score: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
    /// One of "created_at", "rating", "view_count", "favorite_count".
    pub sort_by: Option<String>,
    /// "asc" or "desc".
    pub sort_order: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

pub fn parse_sort(params: &ListRecipesParams) -> (RecipeSort, SortOrder) {
    let sort_by = match params.sort_by.as_deref() {
        Some("rating") => RecipeSort::Rating,
        Some("view_count") => RecipeSort::ViewCount,
        Some("favorite_count") => RecipeSort::FavoriteCount,
        _ => RecipeSort::CreatedAt,
    };
    let sort_order = match params.sort_order.as_deref() {
        Some("asc") => SortOrder::Asc,
        _ => SortOrder::Desc,
    };

    (sort_by, sort_order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_request_rejects_out_of_range_score() {
        let request = RateRecipeRequest {
            score: 6,
            comment: None,
        };
        assert!(request.validate().is_err());

        let request = RateRecipeRequest {
            score: 0,
            comment: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn sort_defaults_to_newest_first() {
        let params = ListRecipesParams {
            category: None,
            cuisine: None,
            difficulty: None,
            search: None,
            sort_by: Some("bogus".to_string()),
            sort_order: None,
            page: None,
            per_page: None,
        };

        let (sort_by, sort_order) = parse_sort(&params);
        assert_eq!(sort_by, RecipeSort::CreatedAt);
        assert_eq!(sort_order, SortOrder::Desc);
    }
}
