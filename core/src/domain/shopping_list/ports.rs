use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::Paged},
    shopping_list::{
        entities::{ShoppingList, ShoppingListItem},
        value_objects::{GetShoppingListsFilter, ListItemDetail, PlanIngredientRow},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingListRepository: Send + Sync {
    fn fetch_lists(
        &self,
        user_id: Uuid,
        filter: GetShoppingListsFilter,
    ) -> impl Future<Output = Result<Paged<ShoppingList>, CoreError>> + Send;

    fn get_list(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingList>, CoreError>> + Send;

    fn create_list(
        &self,
        list: ShoppingList,
        items: Vec<ShoppingListItem>,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn update_list(
        &self,
        list: ShoppingList,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn delete_list(&self, list_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_item(
        &self,
        item_id: Uuid,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingListItem>, CoreError>> + Send;

    fn insert_item(
        &self,
        item: ShoppingListItem,
    ) -> impl Future<Output = Result<ShoppingListItem, CoreError>> + Send;

    fn delete_item(&self, item_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update_item(
        &self,
        item: ShoppingListItem,
    ) -> impl Future<Output = Result<ShoppingListItem, CoreError>> + Send;

    fn items_with_ingredients(
        &self,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ListItemDetail>, CoreError>> + Send;

    /// Every (plan item, recipe ingredient) quantity pair of a meal plan.
    fn plan_ingredient_rows(
        &self,
        meal_plan_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PlanIngredientRow>, CoreError>> + Send;
}
