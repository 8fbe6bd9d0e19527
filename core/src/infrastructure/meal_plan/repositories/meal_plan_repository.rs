use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, value_objects::Paged},
        meal_plan::{
            entities::{MealPlan, MealPlanItem},
            ports::MealPlanRepository,
            value_objects::{GetMealPlansFilter, PlanItemDetail},
        },
        recipe::entities::Recipe,
    },
    entity::{
        meal_plan_items::{Column as ItemColumn, Entity as ItemEntity},
        meal_plans::{Column, Entity},
        recipes,
    },
    infrastructure::meal_plan::mappers::{item_to_active_model, plan_to_active_model},
};

#[derive(Debug, Clone)]
pub struct PostgresMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert_items(&self, items: Vec<MealPlanItem>) -> Result<(), CoreError> {
        if items.is_empty() {
            return Ok(());
        }

        let models = items.iter().map(item_to_active_model);
        ItemEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create meal plan items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}

impl MealPlanRepository for PostgresMealPlanRepository {
    async fn fetch_plans(
        &self,
        user_id: Uuid,
        filter: GetMealPlansFilter,
    ) -> Result<Paged<MealPlan>, CoreError> {
        let mut condition = Condition::all().add(Column::UserId.eq(user_id));

        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status.as_str()));
        }

        let query = Entity::find()
            .filter(condition)
            .order_by_desc(Column::StartDate);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count meal plans: {}", e);
            CoreError::InternalServerError
        })?;

        let models = query
            .offset(filter.page.offset())
            .limit(filter.page.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch meal plans: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Paged {
            items: models.iter().map(MealPlan::from).collect(),
            total,
        })
    }

    async fn get_plan(&self, plan_id: Uuid, user_id: Uuid) -> Result<Option<MealPlan>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(plan_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(MealPlan::from))
    }

    async fn create_plan(
        &self,
        plan: MealPlan,
        items: Vec<MealPlanItem>,
    ) -> Result<MealPlan, CoreError> {
        let created = Entity::insert(plan_to_active_model(&plan))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        self.insert_items(items).await?;

        Ok(MealPlan::from(created))
    }

    async fn update_plan(
        &self,
        plan: MealPlan,
        items: Option<Vec<MealPlanItem>>,
    ) -> Result<MealPlan, CoreError> {
        let updated = Entity::update(plan_to_active_model(&plan))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        if let Some(items) = items {
            ItemEntity::delete_many()
                .filter(ItemColumn::MealPlanId.eq(plan.id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to delete meal plan items: {}", e);
                    CoreError::InternalServerError
                })?;

            self.insert_items(items).await?;
        }

        Ok(MealPlan::from(updated))
    }

    async fn delete_plan(&self, plan_id: Uuid) -> Result<(), CoreError> {
        // Items go with the plan via ON DELETE CASCADE.
        Entity::delete_many()
            .filter(Column::Id.eq(plan_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn items_with_recipes(&self, plan_id: Uuid) -> Result<Vec<PlanItemDetail>, CoreError> {
        let rows = ItemEntity::find()
            .filter(ItemColumn::MealPlanId.eq(plan_id))
            .order_by_asc(ItemColumn::PlannedDate)
            .order_by_asc(ItemColumn::MealType)
            .find_also_related(recipes::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch meal plan items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, recipe)| {
                recipe.map(|r| PlanItemDetail {
                    item: MealPlanItem::from(&item),
                    recipe: Recipe::from(r),
                })
            })
            .collect())
    }

    async fn get_item(
        &self,
        item_id: Uuid,
        plan_id: Uuid,
    ) -> Result<Option<MealPlanItem>, CoreError> {
        let model = ItemEntity::find()
            .filter(ItemColumn::Id.eq(item_id))
            .filter(ItemColumn::MealPlanId.eq(plan_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plan item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(MealPlanItem::from))
    }

    async fn update_item(&self, item: MealPlanItem) -> Result<MealPlanItem, CoreError> {
        let updated = ItemEntity::update(item_to_active_model(&item))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update meal plan item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(MealPlanItem::from(updated))
    }
}
