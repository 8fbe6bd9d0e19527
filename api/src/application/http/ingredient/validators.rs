use chrono::NaiveDate;
use larder_core::domain::nutrition::entities::NutrientRecord;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub category: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub unit: Option<String>,
    pub nutrition_per_100g: Option<NutrientRecord>,
    pub storage_method: Option<String>,
    #[validate(range(min = 0))]
    pub shelf_life_days: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateIngredientRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub category: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub unit: Option<String>,
    pub nutrition_per_100g: Option<NutrientRecord>,
    pub storage_method: Option<String>,
    #[validate(range(min = 0))]
    pub shelf_life_days: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListIngredientsParams {
    pub category: Option<String>,
    /// Case-insensitive name filter.
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchIngredientsParams {
    pub q: String,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStockRequest {
    pub ingredient_id: Uuid,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(length(min = 1, max = 30))]
    pub unit: String,
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub storage_location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStockRequest {
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
    #[validate(length(min = 1, max = 30))]
    pub unit: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub storage_location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListStocksParams {
    pub storage_location: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpiringStocksParams {
    /// Horizon in days, default 7.
    pub days: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let request = CreateIngredientRequest {
            name: "".to_string(),
            category: None,
            unit: None,
            nutrition_per_100g: None,
            storage_method: None,
            shelf_life_days: None,
            description: None,
            image: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn negative_stock_quantity_is_rejected() {
        let request = CreateStockRequest {
            ingredient_id: Uuid::new_v4(),
            quantity: -1.0,
            unit: "g".to_string(),
            purchase_date: None,
            expiry_date: None,
            storage_location: None,
            notes: None,
        };

        assert!(request.validate().is_err());
    }
}
