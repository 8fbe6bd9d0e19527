use crate::domain::{
    common::value_objects::PageQuery,
    ingredient::entities::{Ingredient, IngredientStock},
};

#[derive(Debug, Clone, Default)]
pub struct GetIngredientsFilter {
    pub category: Option<String>,
    /// Case-insensitive name match.
    pub search: Option<String>,
    pub page: PageQuery,
}

#[derive(Debug, Clone, Default)]
pub struct GetStocksFilter {
    pub storage_location: Option<String>,
    pub page: PageQuery,
}

/// Stock row joined with its catalog ingredient.
#[derive(Debug, Clone)]
pub struct StockDetail {
    pub stock: IngredientStock,
    pub ingredient: Ingredient,
}

/// How many rows elsewhere still point at an ingredient.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientUsage {
    pub recipe_refs: u64,
    pub stock_refs: u64,
}

impl IngredientUsage {
    pub fn is_referenced(&self) -> bool {
        self.recipe_refs > 0 || self.stock_refs > 0
    }
}
