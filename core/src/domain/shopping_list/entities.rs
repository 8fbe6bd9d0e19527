use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShoppingListStatus {
    Active,
    Completed,
    Archived,
}

impl ShoppingListStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShoppingListStatus::Active => "active",
            ShoppingListStatus::Completed => "completed",
            ShoppingListStatus::Archived => "archived",
        }
    }
}

impl FromStr for ShoppingListStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ShoppingListStatus::Active),
            "completed" => Ok(ShoppingListStatus::Completed),
            "archived" => Ok(ShoppingListStatus::Archived),
            other => Err(format!("unknown shopping list status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// "manual" or "meal_plan"; `source_id` points at the plan when generated.
    pub source_type: String,
    pub source_id: Option<Uuid>,
    pub status: ShoppingListStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ShoppingListConfig {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub source_type: String,
    pub source_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingListUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ShoppingListStatus>,
}

impl ShoppingList {
    pub fn new(config: ShoppingListConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            description: config.description,
            source_type: config.source_type,
            source_id: config.source_id,
            status: ShoppingListStatus::Active,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: ShoppingListUpdate) {
        let (now, _) = generate_timestamp();

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(status) = update.status {
            if status == ShoppingListStatus::Completed && self.status != ShoppingListStatus::Completed
            {
                self.completed_at = Some(now);
            }
            self.status = status;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub shopping_list_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub is_purchased: bool,
    pub estimated_price: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ShoppingListItemConfig {
    pub shopping_list_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub estimated_price: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingListItemUpdate {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub is_purchased: Option<bool>,
    pub estimated_price: Option<f64>,
    pub notes: Option<String>,
}

impl ShoppingListItem {
    pub fn new(config: ShoppingListItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            shopping_list_id: config.shopping_list_id,
            ingredient_id: config.ingredient_id,
            quantity: config.quantity,
            unit: config.unit,
            is_purchased: false,
            estimated_price: config.estimated_price,
            notes: config.notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: ShoppingListItemUpdate) {
        let (now, _) = generate_timestamp();

        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(is_purchased) = update.is_purchased {
            self.is_purchased = is_purchased;
        }
        if let Some(estimated_price) = update.estimated_price {
            self.estimated_price = Some(estimated_price);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = now;
    }
}
