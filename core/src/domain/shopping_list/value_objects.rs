use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::value_objects::PageQuery,
    ingredient::entities::Ingredient,
    shopping_list::entities::{ShoppingListItem, ShoppingListStatus},
};

#[derive(Debug, Clone, Default)]
pub struct GetShoppingListsFilter {
    pub status: Option<ShoppingListStatus>,
    pub page: PageQuery,
}

/// List item joined with its catalog ingredient.
#[derive(Debug, Clone)]
pub struct ListItemDetail {
    pub item: ShoppingListItem,
    pub ingredient: Ingredient,
}

/// Raw quantity rows of a meal plan, one per (item, recipe ingredient) pair.
#[derive(Debug, Clone)]
pub struct PlanIngredientRow {
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub recipe_servings: i32,
    pub item_servings: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExportEntry {
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub is_purchased: bool,
    pub estimated_price: Option<f64>,
}

/// Printable view of a list, grouped by ingredient category.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShoppingListExport {
    pub list_name: String,
    pub status: ShoppingListStatus,
    pub categorized_items: BTreeMap<String, Vec<ExportEntry>>,
    /// Sum over items not yet purchased.
    pub total_estimated_price: f64,
}
