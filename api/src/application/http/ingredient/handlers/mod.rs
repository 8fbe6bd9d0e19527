pub mod create_ingredient;
pub mod create_stock;
pub mod delete_ingredient;
pub mod delete_stock;
pub mod get_categories;
pub mod get_expiring_stocks;
pub mod get_ingredient;
pub mod get_ingredients;
pub mod get_stocks;
pub mod search_ingredients;
pub mod update_ingredient;
pub mod update_stock;

use larder_core::domain::ingredient::{
    entities::{Ingredient, IngredientStock},
    value_objects::StockDetail,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Stock row with the catalog ingredient it points at.
#[derive(Debug, Serialize, ToSchema)]
pub struct StockResponse {
    #[serde(flatten)]
    pub stock: IngredientStock,
    pub ingredient: Ingredient,
}

impl From<StockDetail> for StockResponse {
    fn from(detail: StockDetail) -> Self {
        Self {
            stock: detail.stock,
            ingredient: detail.ingredient,
        }
    }
}
