use chrono::{Duration, Utc};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, value_objects::Paged},
        ingredient::{
            entities::{Ingredient, IngredientStock},
            ports::StockRepository,
            value_objects::{GetStocksFilter, StockDetail},
        },
    },
    entity::ingredient_stocks::{Column, Entity},
    infrastructure::ingredient::mappers::stock_to_active_model,
};

#[derive(Debug, Clone)]
pub struct PostgresStockRepository {
    pub db: DatabaseConnection,
}

impl PostgresStockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_detail(&self, stock_id: Uuid) -> Result<StockDetail, CoreError> {
        let row = Entity::find_by_id(stock_id)
            .find_also_related(crate::entity::ingredients::Entity)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load stock with ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        match row {
            Some((stock, Some(ingredient))) => Ok(StockDetail {
                stock: IngredientStock::from(stock),
                ingredient: Ingredient::from(ingredient),
            }),
            _ => {
                error!("Stock {} has no resolvable ingredient", stock_id);
                Err(CoreError::InternalServerError)
            }
        }
    }
}

impl StockRepository for PostgresStockRepository {
    async fn fetch_stocks(
        &self,
        user_id: Uuid,
        filter: GetStocksFilter,
    ) -> Result<Paged<StockDetail>, CoreError> {
        let mut condition = Condition::all()
            .add(Column::UserId.eq(user_id))
            .add(Column::IsActive.eq(true));

        if let Some(ref location) = filter.storage_location {
            condition = condition.add(Column::StorageLocation.eq(location.clone()));
        }

        let query = Entity::find()
            .filter(condition)
            .order_by_asc(Column::ExpiryDate);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count stocks: {}", e);
            CoreError::InternalServerError
        })?;

        let rows = query
            .find_also_related(crate::entity::ingredients::Entity)
            .offset(filter.page.offset())
            .limit(filter.page.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch stocks: {}", e);
                CoreError::InternalServerError
            })?;

        let items = rows
            .into_iter()
            .filter_map(|(stock, ingredient)| {
                ingredient.map(|i| StockDetail {
                    stock: IngredientStock::from(stock),
                    ingredient: Ingredient::from(i),
                })
            })
            .collect();

        Ok(Paged { items, total })
    }

    async fn get_stock(
        &self,
        stock_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<IngredientStock>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(stock_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get stock: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(IngredientStock::from))
    }

    async fn create_stock(&self, stock: IngredientStock) -> Result<StockDetail, CoreError> {
        let created = Entity::insert(stock_to_active_model(&stock))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create stock: {}", e);
                CoreError::InternalServerError
            })?;

        self.load_detail(created.id).await
    }

    async fn update_stock(&self, stock: IngredientStock) -> Result<StockDetail, CoreError> {
        let updated = Entity::update(stock_to_active_model(&stock))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update stock: {}", e);
                CoreError::InternalServerError
            })?;

        self.load_detail(updated.id).await
    }

    async fn delete_stock(&self, stock_id: Uuid) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
            .filter(Column::Id.eq(stock_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to deactivate stock: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn expiring_soon(&self, user_id: Uuid, days: i64) -> Result<Vec<StockDetail>, CoreError> {
        let today = Utc::now().date_naive();
        let horizon = today + Duration::days(days);

        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsActive.eq(true))
            .filter(Column::ExpiryDate.is_not_null())
            .filter(Column::ExpiryDate.gte(today))
            .filter(Column::ExpiryDate.lte(horizon))
            .order_by_asc(Column::ExpiryDate)
            .find_also_related(crate::entity::ingredients::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch expiring stocks: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(stock, ingredient)| {
                ingredient.map(|i| StockDetail {
                    stock: IngredientStock::from(stock),
                    ingredient: Ingredient::from(i),
                })
            })
            .collect())
    }
}
