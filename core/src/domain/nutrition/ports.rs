use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::entities::{IngredientUsage, PlannedMeal},
};

/// Read-side port feeding the nutrition calculator.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionRepository: Send + Sync {
    /// All recipe-ingredient rows of a recipe joined with the ingredient's
    /// per-100g record.
    fn recipe_usages(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<IngredientUsage>, CoreError>> + Send;

    /// Completed meal-plan items of a user planned for the given date.
    fn completed_meals_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<PlannedMeal>, CoreError>> + Send;

    /// Every item of a meal plan, completed or not.
    fn meals_for_plan(
        &self,
        meal_plan_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PlannedMeal>, CoreError>> + Send;
}
