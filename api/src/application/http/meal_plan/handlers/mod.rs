pub mod create_meal_plan;
pub mod delete_meal_plan;
pub mod generate_meal_plan;
pub mod get_meal_plan;
pub mod get_meal_plans;
pub mod update_meal_plan;
pub mod update_meal_plan_item;

use larder_core::domain::{
    meal_plan::{entities::MealPlanItem, value_objects::PlanItemDetail},
    recipe::entities::Recipe,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Plan item with the recipe it schedules.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanItemResponse {
    #[serde(flatten)]
    pub item: MealPlanItem,
    pub recipe: Recipe,
}

impl From<PlanItemDetail> for PlanItemResponse {
    fn from(detail: PlanItemDetail) -> Self {
        Self {
            item: detail.item,
            recipe: detail.recipe,
        }
    }
}
