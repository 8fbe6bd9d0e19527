use chrono::{DateTime, Utc};

use crate::domain::{
    common::value_objects::PageQuery,
    ingredient::entities::Ingredient,
    recipe::entities::{Recipe, RecipeIngredient},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeSort {
    #[default]
    CreatedAt,
    Rating,
    ViewCount,
    FavoriteCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

#[derive(Debug, Clone, Default)]
pub struct GetRecipesFilter {
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    /// Matches against title and description, case-insensitive.
    pub search: Option<String>,
    pub sort_by: RecipeSort,
    pub sort_order: SortOrder,
    pub page: PageQuery,
}

/// Recipe ingredient line joined with the ingredient it references.
#[derive(Debug, Clone)]
pub struct RecipeIngredientDetail {
    pub link: RecipeIngredient,
    pub ingredient: Ingredient,
}

/// A favorited recipe together with when it was favorited.
#[derive(Debug, Clone)]
pub struct FavoriteEntry {
    pub recipe: Recipe,
    pub favorited_at: DateTime<Utc>,
}
