use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, nutrition::entities::NutrientRecord};

/// Catalog ingredient. Names are unique; deletion is a soft `is_active` flip
/// so recipes keep resolving historical references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    /// Default measuring unit, e.g. "g" or "ml".
    pub unit: Option<String>,
    pub nutrition_per_100g: Option<NutrientRecord>,
    pub storage_method: Option<String>,
    pub shelf_life_days: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IngredientConfig {
    pub name: String,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub nutrition_per_100g: Option<NutrientRecord>,
    pub storage_method: Option<String>,
    pub shelf_life_days: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub nutrition_per_100g: Option<NutrientRecord>,
    pub storage_method: Option<String>,
    pub shelf_life_days: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Ingredient {
    pub fn new(config: IngredientConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            category: config.category,
            unit: config.unit,
            nutrition_per_100g: config.nutrition_per_100g,
            storage_method: config.storage_method,
            shelf_life_days: config.shelf_life_days,
            description: config.description,
            image: config.image,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: IngredientUpdate) {
        let (now, _) = generate_timestamp();

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(unit) = update.unit {
            self.unit = Some(unit);
        }
        if let Some(nutrition) = update.nutrition_per_100g {
            self.nutrition_per_100g = Some(nutrition);
        }
        if let Some(storage_method) = update.storage_method {
            self.storage_method = Some(storage_method);
        }
        if let Some(shelf_life_days) = update.shelf_life_days {
            self.shelf_life_days = Some(shelf_life_days);
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
        self.updated_at = now;
    }
}

/// What a user has at home of one ingredient. Deletion is the same soft
/// `is_active` flip as the catalog, so used-up rows stay queryable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientStock {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub storage_location: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IngredientStockConfig {
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub storage_location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct IngredientStockUpdate {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub storage_location: Option<String>,
    pub notes: Option<String>,
}

impl IngredientStock {
    pub fn new(config: IngredientStockConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            ingredient_id: config.ingredient_id,
            quantity: config.quantity,
            unit: config.unit,
            purchase_date: config.purchase_date,
            expiry_date: config.expiry_date,
            storage_location: config.storage_location,
            notes: config.notes,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: IngredientStockUpdate) {
        let (now, _) = generate_timestamp();

        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(purchase_date) = update.purchase_date {
            self.purchase_date = Some(purchase_date);
        }
        if let Some(expiry_date) = update.expiry_date {
            self.expiry_date = Some(expiry_date);
        }
        if let Some(storage_location) = update.storage_location {
            self.storage_location = Some(storage_location);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stock_starts_active() {
        let stock = IngredientStock::new(IngredientStockConfig {
            user_id: Uuid::new_v4(),
            ingredient_id: Uuid::new_v4(),
            quantity: 500.0,
            unit: "g".to_string(),
            purchase_date: None,
            expiry_date: None,
            storage_location: None,
            notes: None,
        });

        assert!(stock.is_active);
    }

    #[test]
    fn stock_update_leaves_active_flag_alone() {
        let mut stock = IngredientStock::new(IngredientStockConfig {
            user_id: Uuid::new_v4(),
            ingredient_id: Uuid::new_v4(),
            quantity: 500.0,
            unit: "g".to_string(),
            purchase_date: None,
            expiry_date: None,
            storage_location: None,
            notes: None,
        });

        stock.apply_update(IngredientStockUpdate {
            quantity: Some(250.0),
            ..Default::default()
        });

        assert_eq!(stock.quantity, 250.0);
        assert!(stock.is_active);
    }
}
