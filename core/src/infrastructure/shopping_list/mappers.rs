use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::{
    domain::shopping_list::entities::{ShoppingList, ShoppingListItem, ShoppingListStatus},
    entity::{shopping_list_items, shopping_lists},
};

impl From<&shopping_lists::Model> for ShoppingList {
    fn from(model: &shopping_lists::Model) -> Self {
        let status = model.status.parse().unwrap_or_else(|e| {
            warn!("Defaulting shopping list status: {}", e);
            ShoppingListStatus::Active
        });

        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            description: model.description.clone(),
            source_type: model.source_type.clone(),
            source_id: model.source_id,
            status,
            completed_at: model.completed_at.map(|t| t.to_utc()),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<shopping_lists::Model> for ShoppingList {
    fn from(model: shopping_lists::Model) -> Self {
        Self::from(&model)
    }
}

pub fn list_to_active_model(list: &ShoppingList) -> shopping_lists::ActiveModel {
    shopping_lists::ActiveModel {
        id: Set(list.id),
        user_id: Set(list.user_id),
        name: Set(list.name.clone()),
        description: Set(list.description.clone()),
        source_type: Set(list.source_type.clone()),
        source_id: Set(list.source_id),
        status: Set(list.status.as_str().to_string()),
        completed_at: Set(list.completed_at.map(|t| t.fixed_offset())),
        created_at: Set(list.created_at.fixed_offset()),
        updated_at: Set(list.updated_at.fixed_offset()),
    }
}

impl From<&shopping_list_items::Model> for ShoppingListItem {
    fn from(model: &shopping_list_items::Model) -> Self {
        Self {
            id: model.id,
            shopping_list_id: model.shopping_list_id,
            ingredient_id: model.ingredient_id,
            quantity: model.quantity,
            unit: model.unit.clone(),
            is_purchased: model.is_purchased,
            estimated_price: model.estimated_price,
            notes: model.notes.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<shopping_list_items::Model> for ShoppingListItem {
    fn from(model: shopping_list_items::Model) -> Self {
        Self::from(&model)
    }
}

pub fn item_to_active_model(item: &ShoppingListItem) -> shopping_list_items::ActiveModel {
    shopping_list_items::ActiveModel {
        id: Set(item.id),
        shopping_list_id: Set(item.shopping_list_id),
        ingredient_id: Set(item.ingredient_id),
        quantity: Set(item.quantity),
        unit: Set(item.unit.clone()),
        is_purchased: Set(item.is_purchased),
        estimated_price: Set(item.estimated_price),
        notes: Set(item.notes.clone()),
        created_at: Set(item.created_at.fixed_offset()),
        updated_at: Set(item.updated_at.fixed_offset()),
    }
}
