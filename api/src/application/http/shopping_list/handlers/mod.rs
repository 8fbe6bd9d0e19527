pub mod create_shopping_list;
pub mod create_shopping_list_item;
pub mod delete_shopping_list;
pub mod delete_shopping_list_item;
pub mod export_shopping_list;
pub mod generate_from_meal_plan;
pub mod get_shopping_list;
pub mod get_shopping_lists;
pub mod update_shopping_list;
pub mod update_shopping_list_item;

use larder_core::domain::shopping_list::{
    entities::ShoppingListItem, value_objects::ListItemDetail,
};
use serde::Serialize;
use utoipa::ToSchema;

/// List item with the name and category of its catalog ingredient.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListItemResponse {
    #[serde(flatten)]
    pub item: ShoppingListItem,
    pub ingredient_name: String,
    pub ingredient_category: Option<String>,
}

impl From<ListItemDetail> for ListItemResponse {
    fn from(detail: ListItemDetail) -> Self {
        Self {
            item: detail.item,
            ingredient_name: detail.ingredient.name,
            ingredient_category: detail.ingredient.category,
        }
    }
}
