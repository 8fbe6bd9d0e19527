use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::{
    nutrition::entities::round1,
    shopping_list::{
        entities::ShoppingList,
        value_objects::{ExportEntry, ListItemDetail, PlanIngredientRow, ShoppingListExport},
    },
};

/// Sums per-ingredient quantities across every meal of a plan, scaling each
/// recipe line by `item_servings / recipe_servings`. A recipe with
/// non-positive servings contributes its quantities unscaled.
pub fn aggregate_plan_quantities(rows: &[PlanIngredientRow]) -> BTreeMap<Uuid, f64> {
    let mut totals: BTreeMap<Uuid, f64> = BTreeMap::new();

    for row in rows {
        let ratio = if row.recipe_servings > 0 {
            row.item_servings / f64::from(row.recipe_servings)
        } else {
            1.0
        };
        *totals.entry(row.ingredient_id).or_insert(0.0) += row.quantity * ratio;
    }

    totals
}

/// Aggregated quantities below this threshold are dropped from generated lists.
pub const MIN_LIST_QUANTITY: f64 = 0.1;

pub fn build_export(list: &ShoppingList, items: &[ListItemDetail]) -> ShoppingListExport {
    let mut categorized_items: BTreeMap<String, Vec<ExportEntry>> = BTreeMap::new();
    let mut total_estimated_price = 0.0;

    for detail in items {
        let category = detail
            .ingredient
            .category
            .clone()
            .unwrap_or_else(|| "uncategorized".to_string());

        categorized_items.entry(category).or_default().push(ExportEntry {
            ingredient_name: detail.ingredient.name.clone(),
            quantity: round1(detail.item.quantity),
            unit: detail.item.unit.clone(),
            is_purchased: detail.item.is_purchased,
            estimated_price: detail.item.estimated_price,
        });

        if !detail.item.is_purchased {
            total_estimated_price += detail.item.estimated_price.unwrap_or(0.0);
        }
    }

    for entries in categorized_items.values_mut() {
        entries.sort_by(|a, b| a.ingredient_name.cmp(&b.ingredient_name));
    }

    ShoppingListExport {
        list_name: list.name.clone(),
        status: list.status,
        categorized_items,
        total_estimated_price: (total_estimated_price * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{
        common::{entities::app_errors::CoreError, value_objects::Paged},
        ingredient::entities::{Ingredient, IngredientConfig},
        shopping_list::{
            entities::{ShoppingListConfig, ShoppingListItem, ShoppingListItemConfig},
            ports::ShoppingListRepository,
            value_objects::GetShoppingListsFilter,
        },
    };

    fn row(id: Uuid, quantity: f64, recipe_servings: i32, item_servings: f64) -> PlanIngredientRow {
        PlanIngredientRow {
            ingredient_id: id,
            quantity,
            recipe_servings,
            item_servings,
        }
    }

    #[test]
    fn aggregates_across_meals_with_serving_scale() {
        let flour = Uuid::new_v4();
        let eggs = Uuid::new_v4();
        let rows = vec![
            row(flour, 200.0, 4, 2.0),
            row(flour, 300.0, 2, 1.0),
            row(eggs, 3.0, 3, 6.0),
        ];

        let totals = aggregate_plan_quantities(&rows);
        assert_eq!(totals[&flour], 250.0);
        assert_eq!(totals[&eggs], 6.0);
    }

    #[test]
    fn zero_servings_recipe_contributes_unscaled() {
        let id = Uuid::new_v4();
        let totals = aggregate_plan_quantities(&[row(id, 150.0, 0, 2.0)]);
        assert_eq!(totals[&id], 150.0);
    }

    #[test]
    fn empty_rows_aggregate_to_nothing() {
        assert!(aggregate_plan_quantities(&[]).is_empty());
    }

    fn ingredient(name: &str, category: Option<&str>) -> Ingredient {
        Ingredient::new(IngredientConfig {
            name: name.to_string(),
            category: category.map(str::to_string),
            unit: Some("g".to_string()),
            nutrition_per_100g: None,
            storage_method: None,
            shelf_life_days: None,
            description: None,
            image: None,
        })
    }

    fn item(list_id: Uuid, ingredient_id: Uuid, price: Option<f64>) -> ShoppingListItem {
        ShoppingListItem::new(ShoppingListItemConfig {
            shopping_list_id: list_id,
            ingredient_id,
            quantity: 2.0,
            unit: "g".to_string(),
            estimated_price: price,
            notes: None,
        })
    }

    #[test]
    fn export_groups_by_category_and_sums_unpurchased() {
        let list = ShoppingList::new(ShoppingListConfig {
            user_id: Uuid::new_v4(),
            name: "Weekly shop".to_string(),
            description: None,
            source_type: "manual".to_string(),
            source_id: None,
        });

        let carrot = ingredient("carrot", Some("vegetables"));
        let onion = ingredient("onion", Some("vegetables"));
        let salt = ingredient("salt", None);

        let mut purchased = item(list.id, carrot.id, Some(1.2));
        purchased.is_purchased = true;

        let details = vec![
            ListItemDetail {
                item: purchased,
                ingredient: carrot.clone(),
            },
            ListItemDetail {
                item: item(list.id, onion.id, Some(0.8)),
                ingredient: onion,
            },
            ListItemDetail {
                item: item(list.id, salt.id, Some(0.5)),
                ingredient: salt,
            },
        ];

        let export = build_export(&list, &details);
        assert_eq!(export.list_name, "Weekly shop");
        assert_eq!(export.categorized_items.len(), 2);
        assert_eq!(export.categorized_items["vegetables"].len(), 2);
        assert_eq!(
            export.categorized_items["vegetables"][0].ingredient_name,
            "carrot"
        );
        assert_eq!(export.categorized_items["uncategorized"].len(), 1);
        assert_eq!(export.total_estimated_price, 1.3);
    }

    #[test]
    fn export_of_empty_list() {
        let list = ShoppingList::new(ShoppingListConfig {
            user_id: Uuid::new_v4(),
            name: "Empty".to_string(),
            description: None,
            source_type: "manual".to_string(),
            source_id: None,
        });

        let export = build_export(&list, &[]);
        assert!(export.categorized_items.is_empty());
        assert_eq!(export.total_estimated_price, 0.0);
    }

    /// Item storage only; the list-level methods are not under test here.
    #[derive(Default)]
    struct InMemoryItems {
        items: Mutex<Vec<ShoppingListItem>>,
    }

    impl ShoppingListRepository for InMemoryItems {
        async fn fetch_lists(
            &self,
            _user_id: Uuid,
            _filter: GetShoppingListsFilter,
        ) -> Result<Paged<ShoppingList>, CoreError> {
            unimplemented!()
        }

        async fn get_list(
            &self,
            _list_id: Uuid,
            _user_id: Uuid,
        ) -> Result<Option<ShoppingList>, CoreError> {
            unimplemented!()
        }

        async fn create_list(
            &self,
            _list: ShoppingList,
            _items: Vec<ShoppingListItem>,
        ) -> Result<ShoppingList, CoreError> {
            unimplemented!()
        }

        async fn update_list(&self, _list: ShoppingList) -> Result<ShoppingList, CoreError> {
            unimplemented!()
        }

        async fn delete_list(&self, _list_id: Uuid) -> Result<(), CoreError> {
            unimplemented!()
        }

        async fn get_item(
            &self,
            item_id: Uuid,
            list_id: Uuid,
        ) -> Result<Option<ShoppingListItem>, CoreError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.id == item_id && i.shopping_list_id == list_id)
                .cloned())
        }

        async fn insert_item(
            &self,
            item: ShoppingListItem,
        ) -> Result<ShoppingListItem, CoreError> {
            self.items.lock().unwrap().push(item.clone());
            Ok(item)
        }

        async fn delete_item(&self, item_id: Uuid) -> Result<(), CoreError> {
            self.items.lock().unwrap().retain(|i| i.id != item_id);
            Ok(())
        }

        async fn update_item(
            &self,
            _item: ShoppingListItem,
        ) -> Result<ShoppingListItem, CoreError> {
            unimplemented!()
        }

        async fn items_with_ingredients(
            &self,
            _list_id: Uuid,
        ) -> Result<Vec<ListItemDetail>, CoreError> {
            unimplemented!()
        }

        async fn plan_ingredient_rows(
            &self,
            _meal_plan_id: Uuid,
        ) -> Result<Vec<PlanIngredientRow>, CoreError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn adding_then_removing_an_item_leaves_the_count_unchanged() {
        let repo = InMemoryItems::default();
        let list_id = Uuid::new_v4();

        repo.insert_item(item(list_id, Uuid::new_v4(), None))
            .await
            .unwrap();
        let before = repo.items.lock().unwrap().len();

        let added = repo
            .insert_item(item(list_id, Uuid::new_v4(), Some(2.5)))
            .await
            .unwrap();
        repo.delete_item(added.id).await.unwrap();

        assert_eq!(repo.items.lock().unwrap().len(), before);
        assert!(repo.get_item(added.id, list_id).await.unwrap().is_none());
    }
}
