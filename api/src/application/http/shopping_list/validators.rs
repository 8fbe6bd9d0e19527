use larder_core::domain::shopping_list::entities::ShoppingListStatus;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ShoppingListItemInput {
    pub ingredient_id: Uuid,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(length(min = 1, max = 30))]
    pub unit: String,
    #[validate(range(min = 0.0))]
    pub estimated_price: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateShoppingListRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<ShoppingListItemInput>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateShoppingListRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ShoppingListStatus>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateShoppingListItemRequest {
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
    #[validate(length(min = 1, max = 30))]
    pub unit: Option<String>,
    pub is_purchased: Option<bool>,
    #[validate(range(min = 0.0))]
    pub estimated_price: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GenerateFromMealPlanRequest {
    pub meal_plan_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListShoppingListsParams {
    pub status: Option<ShoppingListStatus>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_item_quantity_is_rejected() {
        let request = CreateShoppingListRequest {
            name: "Weekly shop".to_string(),
            description: None,
            items: vec![ShoppingListItemInput {
                ingredient_id: Uuid::new_v4(),
                quantity: -2.0,
                unit: "g".to_string(),
                estimated_price: None,
                notes: None,
            }],
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn empty_generated_name_is_rejected() {
        let request = GenerateFromMealPlanRequest {
            meal_plan_id: Uuid::new_v4(),
            name: Some("".to_string()),
        };

        assert!(request.validate().is_err());
    }
}
