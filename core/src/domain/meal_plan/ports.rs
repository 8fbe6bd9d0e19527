use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::Paged},
    meal_plan::{
        entities::{MealPlan, MealPlanItem},
        value_objects::{GetMealPlansFilter, PlanItemDetail},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanRepository: Send + Sync {
    fn fetch_plans(
        &self,
        user_id: Uuid,
        filter: GetMealPlansFilter,
    ) -> impl Future<Output = Result<Paged<MealPlan>, CoreError>> + Send;

    fn get_plan(
        &self,
        plan_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<MealPlan>, CoreError>> + Send;

    fn create_plan(
        &self,
        plan: MealPlan,
        items: Vec<MealPlanItem>,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    /// `items` of `Some` replaces the plan's items wholesale.
    fn update_plan(
        &self,
        plan: MealPlan,
        items: Option<Vec<MealPlanItem>>,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn delete_plan(&self, plan_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn items_with_recipes(
        &self,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PlanItemDetail>, CoreError>> + Send;

    fn get_item(
        &self,
        item_id: Uuid,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<Option<MealPlanItem>, CoreError>> + Send;

    fn update_item(
        &self,
        item: MealPlanItem,
    ) -> impl Future<Output = Result<MealPlanItem, CoreError>> + Send;
}
