use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, OnConflict},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{PageQuery, Paged},
        },
        recipe::{
            entities::{Recipe, RecipeFavorite, RecipeIngredient, RecipeRating, RecipeStep},
            ports::RecipeRepository,
            value_objects::{
                FavoriteEntry, GetRecipesFilter, RecipeIngredientDetail, RecipeSort, SortOrder,
            },
        },
    },
    entity::{
        ingredients,
        recipe_favorites::{Column as FavoriteColumn, Entity as FavoriteEntity},
        recipe_ingredients::{Column as IngredientColumn, Entity as IngredientEntity},
        recipe_ratings::{Column as RatingColumn, Entity as RatingEntity},
        recipe_steps::{Column as StepColumn, Entity as StepEntity},
        recipes::{Column, Entity},
    },
    infrastructure::recipe::mappers::{
        favorite_to_active_model, rating_to_active_model, recipe_ingredient_to_active_model,
        recipe_step_to_active_model, recipe_to_active_model,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn replace_ingredients(
        &self,
        recipe_id: Uuid,
        ingredients: Vec<RecipeIngredient>,
    ) -> Result<(), CoreError> {
        IngredientEntity::delete_many()
            .filter(IngredientColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        if !ingredients.is_empty() {
            let models = ingredients.iter().map(recipe_ingredient_to_active_model);
            IngredientEntity::insert_many(models)
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to create recipe ingredients: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        Ok(())
    }

    async fn replace_steps(&self, recipe_id: Uuid, steps: Vec<RecipeStep>) -> Result<(), CoreError> {
        StepEntity::delete_many()
            .filter(StepColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe steps: {}", e);
                CoreError::InternalServerError
            })?;

        if !steps.is_empty() {
            let models = steps.iter().map(recipe_step_to_active_model);
            StepEntity::insert_many(models)
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to create recipe steps: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        Ok(())
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn fetch_recipes(&self, filter: GetRecipesFilter) -> Result<Paged<Recipe>, CoreError> {
        let mut condition = Condition::all().add(Column::IsPublic.eq(true));

        if let Some(ref category) = filter.category {
            condition = condition.add(Column::Category.eq(category.clone()));
        }
        if let Some(ref cuisine) = filter.cuisine {
            condition = condition.add(Column::Cuisine.eq(cuisine.clone()));
        }
        if let Some(ref difficulty) = filter.difficulty {
            condition = condition.add(Column::Difficulty.eq(difficulty.clone()));
        }
        if let Some(ref search) = filter.search {
            condition = condition.add(
                Condition::any()
                    .add(Column::Title.contains(search.clone()))
                    .add(Column::Description.contains(search.clone())),
            );
        }

        let order = match filter.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        let sort_column = match filter.sort_by {
            RecipeSort::CreatedAt => Column::CreatedAt,
            RecipeSort::Rating => Column::Rating,
            RecipeSort::ViewCount => Column::ViewCount,
            RecipeSort::FavoriteCount => Column::FavoriteCount,
        };

        let query = Entity::find().filter(condition).order_by(sort_column, order);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count recipes: {}", e);
            CoreError::InternalServerError
        })?;

        let models = query
            .offset(filter.page.offset())
            .limit(filter.page.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Paged {
            items: models.iter().map(Recipe::from).collect(),
            total,
        })
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let model = Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Recipe::from))
    }

    async fn create_recipe(
        &self,
        recipe: Recipe,
        ingredients: Vec<RecipeIngredient>,
        steps: Vec<RecipeStep>,
    ) -> Result<Recipe, CoreError> {
        let created = Entity::insert(recipe_to_active_model(&recipe))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        if !ingredients.is_empty() {
            let models = ingredients.iter().map(recipe_ingredient_to_active_model);
            IngredientEntity::insert_many(models)
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to create recipe ingredients: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        if !steps.is_empty() {
            let models = steps.iter().map(recipe_step_to_active_model);
            StepEntity::insert_many(models)
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to create recipe steps: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        Ok(Recipe::from(created))
    }

    async fn update_recipe(
        &self,
        recipe: Recipe,
        ingredients: Option<Vec<RecipeIngredient>>,
        steps: Option<Vec<RecipeStep>>,
    ) -> Result<Recipe, CoreError> {
        let updated = Entity::update(recipe_to_active_model(&recipe))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::InternalServerError
            })?;

        if let Some(ingredients) = ingredients {
            self.replace_ingredients(recipe.id, ingredients).await?;
        }
        if let Some(steps) = steps {
            self.replace_steps(recipe.id, steps).await?;
        }

        Ok(Recipe::from(updated))
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        // Children go with the recipe via ON DELETE CASCADE.
        Entity::delete_many()
            .filter(Column::Id.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn increment_view_count(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(
                Column::ViewCount,
                Expr::col(Column::ViewCount).add(1).into(),
            )
            .filter(Column::Id.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to increment view count: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn ingredients_with_details(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredientDetail>, CoreError> {
        let rows = IngredientEntity::find()
            .filter(IngredientColumn::RecipeId.eq(recipe_id))
            .order_by_asc(IngredientColumn::OrderIndex)
            .find_also_related(ingredients::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, ingredient)| {
                ingredient.map(|i| RecipeIngredientDetail {
                    link: RecipeIngredient::from(&link),
                    ingredient: i.into(),
                })
            })
            .collect())
    }

    async fn steps(&self, recipe_id: Uuid) -> Result<Vec<RecipeStep>, CoreError> {
        let models = StepEntity::find()
            .filter(StepColumn::RecipeId.eq(recipe_id))
            .order_by_asc(StepColumn::StepNumber)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipe steps: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.iter().map(RecipeStep::from).collect())
    }

    async fn get_rating(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<RecipeRating>, CoreError> {
        let model = RatingEntity::find()
            .filter(RatingColumn::RecipeId.eq(recipe_id))
            .filter(RatingColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get rating: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(|m| RecipeRating::from(&m)))
    }

    async fn save_rating(&self, rating: RecipeRating) -> Result<RecipeRating, CoreError> {
        let saved = RatingEntity::insert(rating_to_active_model(&rating))
            .on_conflict(
                OnConflict::columns([RatingColumn::RecipeId, RatingColumn::UserId])
                    .update_columns([
                        RatingColumn::Score,
                        RatingColumn::Comment,
                        RatingColumn::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save rating: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(RecipeRating::from(&saved))
    }

    async fn rating_scores(&self, recipe_id: Uuid) -> Result<Vec<i32>, CoreError> {
        let scores: Vec<i32> = RatingEntity::find()
            .select_only()
            .column(RatingColumn::Score)
            .filter(RatingColumn::RecipeId.eq(recipe_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch rating scores: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(scores)
    }

    async fn set_rating_summary(
        &self,
        recipe_id: Uuid,
        rating: f64,
        rating_count: i32,
    ) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::Rating, Expr::value(rating))
            .col_expr(Column::RatingCount, Expr::value(rating_count))
            .filter(Column::Id.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update rating summary: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn get_favorite(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<RecipeFavorite>, CoreError> {
        let model = FavoriteEntity::find()
            .filter(FavoriteColumn::RecipeId.eq(recipe_id))
            .filter(FavoriteColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(|m| RecipeFavorite::from(&m)))
    }

    async fn insert_favorite(&self, favorite: RecipeFavorite) -> Result<RecipeFavorite, CoreError> {
        let created = FavoriteEntity::insert(favorite_to_active_model(&favorite))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(RecipeFavorite::from(&created))
    }

    async fn delete_favorite(&self, favorite_id: Uuid) -> Result<(), CoreError> {
        FavoriteEntity::delete_many()
            .filter(FavoriteColumn::Id.eq(favorite_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn set_favorite_count(
        &self,
        recipe_id: Uuid,
        favorite_count: i32,
    ) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::FavoriteCount, Expr::value(favorite_count))
            .filter(Column::Id.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update favorite count: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn fetch_by_author(
        &self,
        author_id: Uuid,
        page: PageQuery,
    ) -> Result<Paged<Recipe>, CoreError> {
        let query = Entity::find()
            .filter(Column::AuthorId.eq(author_id))
            .order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count author recipes: {}", e);
            CoreError::InternalServerError
        })?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch author recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Paged {
            items: models.iter().map(Recipe::from).collect(),
            total,
        })
    }

    async fn fetch_favorites(
        &self,
        user_id: Uuid,
        page: PageQuery,
    ) -> Result<Paged<FavoriteEntry>, CoreError> {
        let query = FavoriteEntity::find()
            .filter(FavoriteColumn::UserId.eq(user_id))
            .order_by_desc(FavoriteColumn::CreatedAt);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count favorites: {}", e);
            CoreError::InternalServerError
        })?;

        let rows = query
            .find_also_related(Entity)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch favorites: {}", e);
                CoreError::InternalServerError
            })?;

        let items = rows
            .into_iter()
            .filter_map(|(favorite, recipe)| {
                recipe.map(|r| FavoriteEntry {
                    recipe: Recipe::from(r),
                    favorited_at: favorite.created_at.to_utc(),
                })
            })
            .collect();

        Ok(Paged { items, total })
    }

    async fn public_recipe_ids(&self) -> Result<Vec<Uuid>, CoreError> {
        let ids: Vec<Uuid> = Entity::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::IsPublic.eq(true))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch public recipe ids: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ids)
    }
}
