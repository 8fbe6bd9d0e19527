use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::value_objects::PageQuery,
    meal_plan::entities::{MealPlanStatus, MealType},
    recipe::entities::Recipe,
};

#[derive(Debug, Clone, Default)]
pub struct GetMealPlansFilter {
    pub status: Option<MealPlanStatus>,
    pub page: PageQuery,
}

/// Plan item joined with its recipe, for item listings and nutrition.
#[derive(Debug, Clone)]
pub struct PlanItemDetail {
    pub item: crate::domain::meal_plan::entities::MealPlanItem,
    pub recipe: Recipe,
}

/// One slot of an auto-generated plan before items are persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSlot {
    pub recipe_id: Uuid,
    pub planned_date: NaiveDate,
    pub meal_type: MealType,
}
