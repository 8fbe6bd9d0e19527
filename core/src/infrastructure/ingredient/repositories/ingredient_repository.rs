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
            entities::Ingredient,
            ports::IngredientRepository,
            value_objects::{GetIngredientsFilter, IngredientUsage},
        },
    },
    entity::{
        ingredient_stocks::{Column as StockColumn, Entity as StockEntity},
        ingredients::{Column, Entity},
        recipe_ingredients::{Column as RecipeIngredientColumn, Entity as RecipeIngredientEntity},
    },
    infrastructure::ingredient::mappers::ingredient_to_active_model,
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn fetch_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> Result<Paged<Ingredient>, CoreError> {
        let mut condition = Condition::all().add(Column::IsActive.eq(true));

        if let Some(ref category) = filter.category {
            condition = condition.add(Column::Category.eq(category.clone()));
        }
        if let Some(ref search) = filter.search {
            condition = condition.add(Column::Name.contains(search.clone()));
        }

        let query = Entity::find().filter(condition).order_by_asc(Column::Name);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        let models = query
            .offset(filter.page.offset())
            .limit(filter.page.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Paged {
            items: models.iter().map(Ingredient::from).collect(),
            total,
        })
    }

    async fn get_active(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(ingredient_id))
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Ingredient::from))
    }

    async fn get_any(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let model = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Ingredient::from))
    }

    async fn find_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
        let model = Entity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up ingredient by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Ingredient::from))
    }

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let created = Entity::insert(ingredient_to_active_model(&ingredient))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(created))
    }

    async fn update_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let updated = Entity::update(ingredient_to_active_model(&ingredient))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(updated))
    }

    async fn soft_delete(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
            .filter(Column::Id.eq(ingredient_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to deactivate ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn categories(&self) -> Result<Vec<String>, CoreError> {
        let categories: Vec<Option<String>> = Entity::find()
            .select_only()
            .column(Column::Category)
            .filter(Column::IsActive.eq(true))
            .filter(Column::Category.is_not_null())
            .distinct()
            .order_by_asc(Column::Category)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredient categories: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(categories.into_iter().flatten().collect())
    }

    async fn search(&self, query: String, limit: u64) -> Result<Vec<Ingredient>, CoreError> {
        let models = Entity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Name.contains(query))
            .order_by_asc(Column::Name)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.iter().map(Ingredient::from).collect())
    }

    async fn usage_counts(&self, ingredient_id: Uuid) -> Result<IngredientUsage, CoreError> {
        let recipe_refs = RecipeIngredientEntity::find()
            .filter(RecipeIngredientColumn::IngredientId.eq(ingredient_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count recipe references: {}", e);
                CoreError::InternalServerError
            })?;

        let stock_refs = StockEntity::find()
            .filter(StockColumn::IngredientId.eq(ingredient_id))
            .filter(StockColumn::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count stock references: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(IngredientUsage {
            recipe_refs,
            stock_refs,
        })
    }

    async fn get_many(&self, ingredient_ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Entity::find()
            .filter(Column::Id.is_in(ingredient_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.iter().map(Ingredient::from).collect())
    }
}
