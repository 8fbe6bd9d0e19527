use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::{
    domain::{
        ingredient::entities::{Ingredient, IngredientStock},
        nutrition::entities::NutrientRecord,
    },
    entity::{ingredient_stocks, ingredients},
};

/// Nutrition blobs are stored as JSON; a malformed blob degrades to `None`
/// rather than failing the whole row.
pub fn parse_nutrition(value: Option<&serde_json::Value>) -> Option<NutrientRecord> {
    let value = value?;
    match serde_json::from_value(value.clone()) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Ignoring malformed nutrition blob: {}", e);
            None
        }
    }
}

impl From<&ingredients::Model> for Ingredient {
    fn from(model: &ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            category: model.category.clone(),
            unit: model.unit.clone(),
            nutrition_per_100g: parse_nutrition(model.nutrition_per_100g.as_ref()),
            storage_method: model.storage_method.clone(),
            shelf_life_days: model.shelf_life_days,
            description: model.description.clone(),
            image: model.image.clone(),
            is_active: model.is_active,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self::from(&model)
    }
}

pub fn ingredient_to_active_model(ingredient: &Ingredient) -> ingredients::ActiveModel {
    let nutrition = ingredient
        .nutrition_per_100g
        .as_ref()
        .and_then(|n| serde_json::to_value(n).ok());

    ingredients::ActiveModel {
        id: Set(ingredient.id),
        name: Set(ingredient.name.clone()),
        category: Set(ingredient.category.clone()),
        unit: Set(ingredient.unit.clone()),
        nutrition_per_100g: Set(nutrition),
        storage_method: Set(ingredient.storage_method.clone()),
        shelf_life_days: Set(ingredient.shelf_life_days),
        description: Set(ingredient.description.clone()),
        image: Set(ingredient.image.clone()),
        is_active: Set(ingredient.is_active),
        created_at: Set(ingredient.created_at.fixed_offset()),
        updated_at: Set(ingredient.updated_at.fixed_offset()),
    }
}

impl From<&ingredient_stocks::Model> for IngredientStock {
    fn from(model: &ingredient_stocks::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            ingredient_id: model.ingredient_id,
            quantity: model.quantity,
            unit: model.unit.clone(),
            purchase_date: model.purchase_date,
            expiry_date: model.expiry_date,
            storage_location: model.storage_location.clone(),
            notes: model.notes.clone(),
            is_active: model.is_active,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<ingredient_stocks::Model> for IngredientStock {
    fn from(model: ingredient_stocks::Model) -> Self {
        Self::from(&model)
    }
}

pub fn stock_to_active_model(stock: &IngredientStock) -> ingredient_stocks::ActiveModel {
    ingredient_stocks::ActiveModel {
        id: Set(stock.id),
        user_id: Set(stock.user_id),
        ingredient_id: Set(stock.ingredient_id),
        quantity: Set(stock.quantity),
        unit: Set(stock.unit.clone()),
        purchase_date: Set(stock.purchase_date),
        expiry_date: Set(stock.expiry_date),
        storage_location: Set(stock.storage_location.clone()),
        notes: Set(stock.notes.clone()),
        is_active: Set(stock.is_active),
        created_at: Set(stock.created_at.fixed_offset()),
        updated_at: Set(stock.updated_at.fixed_offset()),
    }
}
