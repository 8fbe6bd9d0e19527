use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::Paged},
    ingredient::{
        entities::{Ingredient, IngredientStock},
        value_objects::{GetIngredientsFilter, GetStocksFilter, IngredientUsage, StockDetail},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    /// Active ingredients only.
    fn fetch_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Paged<Ingredient>, CoreError>> + Send;

    fn get_active(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    /// Resolves regardless of `is_active`, for historical recipe references.
    fn get_any(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn find_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn create_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn soft_delete(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Distinct categories of active ingredients, sorted.
    fn categories(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn search(
        &self,
        query: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn usage_counts(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<IngredientUsage, CoreError>> + Send;

    fn get_many(
        &self,
        ingredient_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait StockRepository: Send + Sync {
    fn fetch_stocks(
        &self,
        user_id: Uuid,
        filter: GetStocksFilter,
    ) -> impl Future<Output = Result<Paged<StockDetail>, CoreError>> + Send;

    fn get_stock(
        &self,
        stock_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<IngredientStock>, CoreError>> + Send;

    fn create_stock(
        &self,
        stock: IngredientStock,
    ) -> impl Future<Output = Result<StockDetail, CoreError>> + Send;

    fn update_stock(
        &self,
        stock: IngredientStock,
    ) -> impl Future<Output = Result<StockDetail, CoreError>> + Send;

    fn delete_stock(&self, stock_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Stocks whose expiry date falls within the next `days` days, soonest first.
    fn expiring_soon(
        &self,
        user_id: Uuid,
        days: i64,
    ) -> impl Future<Output = Result<Vec<StockDetail>, CoreError>> + Send;
}
