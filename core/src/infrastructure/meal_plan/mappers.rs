use std::collections::BTreeMap;

use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::{
    domain::meal_plan::entities::{MealPlan, MealPlanItem, MealPlanStatus, MealType},
    entity::{meal_plan_items, meal_plans},
};

fn parse_targets(value: &serde_json::Value) -> BTreeMap<String, f64> {
    match serde_json::from_value(value.clone()) {
        Ok(targets) => targets,
        Err(e) => {
            warn!("Ignoring malformed nutrition targets blob: {}", e);
            BTreeMap::new()
        }
    }
}

impl From<&meal_plans::Model> for MealPlan {
    fn from(model: &meal_plans::Model) -> Self {
        let status = model.status.parse().unwrap_or_else(|e| {
            warn!("Defaulting meal plan status: {}", e);
            MealPlanStatus::Active
        });

        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            description: model.description.clone(),
            start_date: model.start_date,
            end_date: model.end_date,
            status,
            nutrition_targets: parse_targets(&model.nutrition_targets),
            is_generated: model.is_generated,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<meal_plans::Model> for MealPlan {
    fn from(model: meal_plans::Model) -> Self {
        Self::from(&model)
    }
}

pub fn plan_to_active_model(plan: &MealPlan) -> meal_plans::ActiveModel {
    meal_plans::ActiveModel {
        id: Set(plan.id),
        user_id: Set(plan.user_id),
        name: Set(plan.name.clone()),
        description: Set(plan.description.clone()),
        start_date: Set(plan.start_date),
        end_date: Set(plan.end_date),
        status: Set(plan.status.as_str().to_string()),
        nutrition_targets: Set(serde_json::json!(plan.nutrition_targets)),
        is_generated: Set(plan.is_generated),
        created_at: Set(plan.created_at.fixed_offset()),
        updated_at: Set(plan.updated_at.fixed_offset()),
    }
}

impl From<&meal_plan_items::Model> for MealPlanItem {
    fn from(model: &meal_plan_items::Model) -> Self {
        let meal_type = model.meal_type.parse().unwrap_or_else(|e| {
            warn!("Defaulting meal type: {}", e);
            MealType::Dinner
        });

        Self {
            id: model.id,
            meal_plan_id: model.meal_plan_id,
            recipe_id: model.recipe_id,
            planned_date: model.planned_date,
            meal_type,
            servings: model.servings,
            notes: model.notes.clone(),
            is_completed: model.is_completed,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<meal_plan_items::Model> for MealPlanItem {
    fn from(model: meal_plan_items::Model) -> Self {
        Self::from(&model)
    }
}

pub fn item_to_active_model(item: &MealPlanItem) -> meal_plan_items::ActiveModel {
    meal_plan_items::ActiveModel {
        id: Set(item.id),
        meal_plan_id: Set(item.meal_plan_id),
        recipe_id: Set(item.recipe_id),
        planned_date: Set(item.planned_date),
        meal_type: Set(item.meal_type.as_str().to_string()),
        servings: Set(item.servings),
        notes: Set(item.notes.clone()),
        is_completed: Set(item.is_completed),
        created_at: Set(item.created_at.fixed_offset()),
        updated_at: Set(item.updated_at.fixed_offset()),
    }
}
