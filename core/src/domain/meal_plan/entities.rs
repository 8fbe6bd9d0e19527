use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(format!("unknown meal type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealPlanStatus {
    Active,
    Completed,
    Cancelled,
}

impl MealPlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealPlanStatus::Active => "active",
            MealPlanStatus::Completed => "completed",
            MealPlanStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for MealPlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MealPlanStatus::Active),
            "completed" => Ok(MealPlanStatus::Completed),
            "cancelled" => Ok(MealPlanStatus::Cancelled),
            other => Err(format!("unknown meal plan status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: MealPlanStatus,
    /// Daily nutrition targets keyed by nutrient name, e.g. "calories".
    pub nutrition_targets: BTreeMap<String, f64>,
    pub is_generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MealPlanConfig {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nutrition_targets: BTreeMap<String, f64>,
    pub is_generated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MealPlanUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<MealPlanStatus>,
    pub nutrition_targets: Option<BTreeMap<String, f64>>,
}

impl MealPlan {
    pub fn new(config: MealPlanConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            description: config.description,
            start_date: config.start_date,
            end_date: config.end_date,
            status: MealPlanStatus::Active,
            nutrition_targets: config.nutrition_targets,
            is_generated: config.is_generated,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: MealPlanUpdate) {
        let (now, _) = generate_timestamp();

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(targets) = update.nutrition_targets {
            self.nutrition_targets = targets;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanItem {
    pub id: Uuid,
    pub meal_plan_id: Uuid,
    pub recipe_id: Uuid,
    pub planned_date: NaiveDate,
    pub meal_type: MealType,
    pub servings: f64,
    pub notes: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MealPlanItemConfig {
    pub meal_plan_id: Uuid,
    pub recipe_id: Uuid,
    pub planned_date: NaiveDate,
    pub meal_type: MealType,
    pub servings: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MealPlanItemUpdate {
    pub recipe_id: Option<Uuid>,
    pub planned_date: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
    pub servings: Option<f64>,
    pub notes: Option<String>,
    pub is_completed: Option<bool>,
}

impl MealPlanItem {
    pub fn new(config: MealPlanItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            meal_plan_id: config.meal_plan_id,
            recipe_id: config.recipe_id,
            planned_date: config.planned_date,
            meal_type: config.meal_type,
            servings: config.servings,
            notes: config.notes,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: MealPlanItemUpdate) {
        let (now, _) = generate_timestamp();

        if let Some(recipe_id) = update.recipe_id {
            self.recipe_id = recipe_id;
        }
        if let Some(planned_date) = update.planned_date {
            self.planned_date = planned_date;
        }
        if let Some(meal_type) = update.meal_type {
            self.meal_type = meal_type;
        }
        if let Some(servings) = update.servings {
            self.servings = servings;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        if let Some(is_completed) = update.is_completed {
            self.is_completed = is_completed;
        }
        self.updated_at = now;
    }
}
