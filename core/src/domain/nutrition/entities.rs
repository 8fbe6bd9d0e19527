use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::meal_plan::entities::MealType;

/// The seven tracked nutrients, normalized to 100 grams of an ingredient.
/// A missing record on an ingredient is treated as all-zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientRecord {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub sodium: f64,
}

impl NutrientRecord {
    pub fn add(&mut self, other: &NutrientRecord) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
        self.fiber += other.fiber;
        self.sugar += other.sugar;
        self.sodium += other.sodium;
    }

    pub fn scale(&self, factor: f64) -> NutrientRecord {
        NutrientRecord {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
            sugar: self.sugar * factor,
            sodium: self.sodium * factor,
        }
    }

    /// Rounds every nutrient to 1 decimal place, half away from zero
    /// (`f64::round` semantics), so 0.05 becomes 0.1.
    pub fn rounded(&self) -> NutrientRecord {
        NutrientRecord {
            calories: round1(self.calories),
            protein: round1(self.protein),
            carbs: round1(self.carbs),
            fat: round1(self.fat),
            fiber: round1(self.fiber),
            sugar: round1(self.sugar),
            sodium: round1(self.sodium),
        }
    }

    /// Looks up a nutrient by its target-map key.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "calories" => Some(self.calories),
            "protein" => Some(self.protein),
            "carbs" => Some(self.carbs),
            "fat" => Some(self.fat),
            "fiber" => Some(self.fiber),
            "sugar" => Some(self.sugar),
            "sodium" => Some(self.sodium),
            _ => None,
        }
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One recipe-ingredient row as the calculator consumes it. `quantity` is
/// taken as gram-equivalent against the per-100g basis; no unit conversion
/// is performed.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientUsage {
    pub ingredient_id: Uuid,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub per_100g: Option<NutrientRecord>,
}

/// Per-ingredient share of a recipe's totals, for the breakdown view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientNutrition {
    pub ingredient_id: Uuid,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub nutrition: NutrientRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeNutrition {
    pub total: NutrientRecord,
    pub per_serving: NutrientRecord,
    pub ingredients: Vec<IngredientNutrition>,
}

/// A meal-plan item joined with enough of its recipe to compute nutrition.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMeal {
    pub recipe_id: Uuid,
    pub recipe_title: String,
    pub recipe_servings: i32,
    pub meal_type: MealType,
    pub planned_date: NaiveDate,
    /// Plan servings are fractional; half a portion is a valid entry.
    pub servings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealNutrition {
    pub meal_type: MealType,
    pub recipe_id: Uuid,
    pub recipe_title: String,
    pub servings: f64,
    pub nutrition: NutrientRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub totals: NutrientRecord,
    pub meals: Vec<MealNutrition>,
}

/// One day's {calories, protein, carbs, fat} subset for the weekly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyIntake {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyAverage {
    pub avg_calories: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyNutrition {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_data: Vec<DailyIntake>,
    pub average: WeeklyAverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    Achieved,
    Close,
    Under,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TargetAnalysis {
    pub target: f64,
    pub actual: f64,
    pub achievement_rate: f64,
    pub status: TargetStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub kind: String,
    pub message: String,
    pub priority: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayBreakdown {
    pub totals: NutrientRecord,
    pub meals: Vec<MealNutrition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanNutritionReport {
    pub totals: NutrientRecord,
    pub daily_breakdown: BTreeMap<NaiveDate, DayBreakdown>,
    pub target_analysis: BTreeMap<String, TargetAnalysis>,
    pub recommendations: Vec<Recommendation>,
}
