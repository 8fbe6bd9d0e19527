use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal_plan::entities::MealType,
        nutrition::{
            entities::{IngredientUsage, PlannedMeal},
            ports::NutritionRepository,
        },
    },
    entity::{
        ingredients,
        meal_plan_items::{Column as ItemColumn, Entity as ItemEntity, Model as ItemModel},
        meal_plans::{Column as PlanColumn, Entity as PlanEntity},
        recipe_ingredients::{Column as RecipeIngredientColumn, Entity as RecipeIngredientEntity},
        recipes,
    },
    infrastructure::ingredient::mappers::parse_nutrition,
};

#[derive(Debug, Clone)]
pub struct PostgresNutritionRepository {
    pub db: DatabaseConnection,
}

impl PostgresNutritionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn planned_meal(item: &ItemModel, recipe: &recipes::Model) -> PlannedMeal {
    let meal_type = item.meal_type.parse().unwrap_or_else(|e| {
        warn!("Defaulting meal type: {}", e);
        MealType::Dinner
    });

    PlannedMeal {
        recipe_id: recipe.id,
        recipe_title: recipe.title.clone(),
        recipe_servings: recipe.servings,
        meal_type,
        planned_date: item.planned_date,
        servings: item.servings,
    }
}

impl NutritionRepository for PostgresNutritionRepository {
    async fn recipe_usages(&self, recipe_id: Uuid) -> Result<Vec<IngredientUsage>, CoreError> {
        let rows = RecipeIngredientEntity::find()
            .filter(RecipeIngredientColumn::RecipeId.eq(recipe_id))
            .order_by_asc(RecipeIngredientColumn::OrderIndex)
            .find_also_related(ingredients::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, ingredient)| {
                ingredient.map(|i| IngredientUsage {
                    ingredient_id: i.id,
                    ingredient_name: i.name.clone(),
                    quantity: link.quantity,
                    unit: link.unit.clone(),
                    per_100g: parse_nutrition(i.nutrition_per_100g.as_ref()),
                })
            })
            .collect())
    }

    async fn completed_meals_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<PlannedMeal>, CoreError> {
        let plan_ids: Vec<Uuid> = PlanEntity::find()
            .select_only()
            .column(PlanColumn::Id)
            .filter(PlanColumn::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch user's meal plans: {}", e);
                CoreError::InternalServerError
            })?;

        if plan_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = ItemEntity::find()
            .filter(ItemColumn::MealPlanId.is_in(plan_ids))
            .filter(ItemColumn::PlannedDate.eq(date))
            .filter(ItemColumn::IsCompleted.eq(true))
            .order_by_asc(ItemColumn::MealType)
            .find_also_related(recipes::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch completed meals: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, recipe)| recipe.map(|r| planned_meal(&item, &r)))
            .collect())
    }

    async fn meals_for_plan(&self, meal_plan_id: Uuid) -> Result<Vec<PlannedMeal>, CoreError> {
        let rows = ItemEntity::find()
            .filter(ItemColumn::MealPlanId.eq(meal_plan_id))
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
            .filter_map(|(item, recipe)| recipe.map(|r| planned_meal(&item, &r)))
            .collect())
    }
}
