use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, value_objects::Paged},
        ingredient::entities::Ingredient,
        shopping_list::{
            entities::{ShoppingList, ShoppingListItem},
            ports::ShoppingListRepository,
            value_objects::{GetShoppingListsFilter, ListItemDetail, PlanIngredientRow},
        },
    },
    entity::{
        ingredients,
        meal_plan_items::{Column as PlanItemColumn, Entity as PlanItemEntity},
        recipe_ingredients::{Column as RecipeIngredientColumn, Entity as RecipeIngredientEntity},
        recipes::{Column as RecipeColumn, Entity as RecipeEntity},
        shopping_list_items::{Column as ItemColumn, Entity as ItemEntity},
        shopping_lists::{Column, Entity},
    },
    infrastructure::shopping_list::mappers::{item_to_active_model, list_to_active_model},
};

#[derive(Debug, Clone)]
pub struct PostgresShoppingListRepository {
    pub db: DatabaseConnection,
}

impl PostgresShoppingListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ShoppingListRepository for PostgresShoppingListRepository {
    async fn fetch_lists(
        &self,
        user_id: Uuid,
        filter: GetShoppingListsFilter,
    ) -> Result<Paged<ShoppingList>, CoreError> {
        let mut condition = Condition::all().add(Column::UserId.eq(user_id));

        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status.as_str()));
        }

        let query = Entity::find()
            .filter(condition)
            .order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count shopping lists: {}", e);
            CoreError::InternalServerError
        })?;

        let models = query
            .offset(filter.page.offset())
            .limit(filter.page.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch shopping lists: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Paged {
            items: models.iter().map(ShoppingList::from).collect(),
            total,
        })
    }

    async fn get_list(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ShoppingList>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(list_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(ShoppingList::from))
    }

    async fn create_list(
        &self,
        list: ShoppingList,
        items: Vec<ShoppingListItem>,
    ) -> Result<ShoppingList, CoreError> {
        let created = Entity::insert(list_to_active_model(&list))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        if !items.is_empty() {
            let models = items.iter().map(item_to_active_model);
            ItemEntity::insert_many(models)
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to create shopping list items: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        Ok(ShoppingList::from(created))
    }

    async fn update_list(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let updated = Entity::update(list_to_active_model(&list))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ShoppingList::from(updated))
    }

    async fn delete_list(&self, list_id: Uuid) -> Result<(), CoreError> {
        // Items go with the list via ON DELETE CASCADE.
        Entity::delete_many()
            .filter(Column::Id.eq(list_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn get_item(
        &self,
        item_id: Uuid,
        list_id: Uuid,
    ) -> Result<Option<ShoppingListItem>, CoreError> {
        let model = ItemEntity::find()
            .filter(ItemColumn::Id.eq(item_id))
            .filter(ItemColumn::ShoppingListId.eq(list_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping list item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(ShoppingListItem::from))
    }

    async fn insert_item(&self, item: ShoppingListItem) -> Result<ShoppingListItem, CoreError> {
        let created = ItemEntity::insert(item_to_active_model(&item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to insert shopping list item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ShoppingListItem::from(created))
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<(), CoreError> {
        ItemEntity::delete_many()
            .filter(ItemColumn::Id.eq(item_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping list item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn update_item(&self, item: ShoppingListItem) -> Result<ShoppingListItem, CoreError> {
        let updated = ItemEntity::update(item_to_active_model(&item))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update shopping list item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ShoppingListItem::from(updated))
    }

    async fn items_with_ingredients(
        &self,
        list_id: Uuid,
    ) -> Result<Vec<ListItemDetail>, CoreError> {
        let rows = ItemEntity::find()
            .filter(ItemColumn::ShoppingListId.eq(list_id))
            .order_by_asc(ItemColumn::CreatedAt)
            .find_also_related(ingredients::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch shopping list items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, ingredient)| {
                ingredient.map(|i| ListItemDetail {
                    item: ShoppingListItem::from(&item),
                    ingredient: Ingredient::from(i),
                })
            })
            .collect())
    }

    async fn plan_ingredient_rows(
        &self,
        meal_plan_id: Uuid,
    ) -> Result<Vec<PlanIngredientRow>, CoreError> {
        let items = PlanItemEntity::find()
            .filter(PlanItemColumn::MealPlanId.eq(meal_plan_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch meal plan items: {}", e);
                CoreError::InternalServerError
            })?;

        if items.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<Uuid> = items.iter().map(|i| i.recipe_id).collect();

        let servings: HashMap<Uuid, i32> = RecipeEntity::find()
            .select_only()
            .column(RecipeColumn::Id)
            .column(RecipeColumn::Servings)
            .filter(RecipeColumn::Id.is_in(recipe_ids.clone()))
            .into_tuple::<(Uuid, i32)>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipe servings: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .collect();

        let links = RecipeIngredientEntity::find()
            .filter(RecipeIngredientColumn::RecipeId.is_in(recipe_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        let mut by_recipe: HashMap<Uuid, Vec<(Uuid, f64)>> = HashMap::new();
        for link in links {
            by_recipe
                .entry(link.recipe_id)
                .or_default()
                .push((link.ingredient_id, link.quantity));
        }

        let mut rows = Vec::new();
        for item in &items {
            let recipe_servings = servings.get(&item.recipe_id).copied().unwrap_or(0);
            if let Some(lines) = by_recipe.get(&item.recipe_id) {
                for (ingredient_id, quantity) in lines {
                    rows.push(PlanIngredientRow {
                        ingredient_id: *ingredient_id,
                        quantity: *quantity,
                        recipe_servings,
                        item_servings: item.servings,
                    });
                }
            }
        }

        Ok(rows)
    }
}
