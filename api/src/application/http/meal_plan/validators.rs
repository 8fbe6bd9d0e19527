use std::collections::BTreeMap;

use chrono::NaiveDate;
use larder_core::domain::meal_plan::entities::{MealPlanStatus, MealType};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MealPlanItemInput {
    pub recipe_id: Uuid,
    pub planned_date: NaiveDate,
    pub meal_type: MealType,
    #[validate(range(min = 0.1))]
    pub servings: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMealPlanRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub nutrition_targets: BTreeMap<String, f64>,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<MealPlanItemInput>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateMealPlanRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<MealPlanStatus>,
    pub nutrition_targets: Option<BTreeMap<String, f64>>,
    #[validate(nested)]
    pub items: Option<Vec<MealPlanItemInput>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateMealPlanItemRequest {
    pub recipe_id: Option<Uuid>,
    pub planned_date: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
    #[validate(range(min = 0.1))]
    pub servings: Option<f64>,
    pub notes: Option<String>,
    pub is_completed: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GenerateMealPlanRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub nutrition_targets: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMealPlansParams {
    pub status: Option<MealPlanStatus>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_servings_item_is_rejected() {
        let request = CreateMealPlanRequest {
            name: "Week 1".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            nutrition_targets: BTreeMap::new(),
            items: vec![MealPlanItemInput {
                recipe_id: Uuid::new_v4(),
                planned_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
                meal_type: MealType::Lunch,
                servings: 0.0,
                notes: None,
            }],
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn empty_plan_name_is_rejected() {
        let request = GenerateMealPlanRequest {
            name: "".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            nutrition_targets: BTreeMap::new(),
        };

        assert!(request.validate().is_err());
    }
}
