use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        value_objects::{PageQuery, Paged},
    },
    recipe::{
        entities::{Recipe, RecipeFavorite, RecipeIngredient, RecipeRating, RecipeStep},
        value_objects::{FavoriteEntry, GetRecipesFilter, RecipeIngredientDetail},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Public recipes only; the author's own listing goes through `fetch_by_author`.
    fn fetch_recipes(
        &self,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Paged<Recipe>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn create_recipe(
        &self,
        recipe: Recipe,
        ingredients: Vec<RecipeIngredient>,
        steps: Vec<RecipeStep>,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// `Some` for ingredients or steps replaces that child set wholesale.
    fn update_recipe(
        &self,
        recipe: Recipe,
        ingredients: Option<Vec<RecipeIngredient>>,
        steps: Option<Vec<RecipeStep>>,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(&self, recipe_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn increment_view_count(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn ingredients_with_details(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeIngredientDetail>, CoreError>> + Send;

    fn steps(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeStep>, CoreError>> + Send;

    fn get_rating(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<RecipeRating>, CoreError>> + Send;

    fn save_rating(
        &self,
        rating: RecipeRating,
    ) -> impl Future<Output = Result<RecipeRating, CoreError>> + Send;

    fn rating_scores(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<i32>, CoreError>> + Send;

    /// Persists a recomputed average and count after a rating changes.
    fn set_rating_summary(
        &self,
        recipe_id: Uuid,
        rating: f64,
        rating_count: i32,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_favorite(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<RecipeFavorite>, CoreError>> + Send;

    fn insert_favorite(
        &self,
        favorite: RecipeFavorite,
    ) -> impl Future<Output = Result<RecipeFavorite, CoreError>> + Send;

    fn delete_favorite(
        &self,
        favorite_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn set_favorite_count(
        &self,
        recipe_id: Uuid,
        favorite_count: i32,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn fetch_by_author(
        &self,
        author_id: Uuid,
        page: PageQuery,
    ) -> impl Future<Output = Result<Paged<Recipe>, CoreError>> + Send;

    fn fetch_favorites(
        &self,
        user_id: Uuid,
        page: PageQuery,
    ) -> impl Future<Output = Result<Paged<FavoriteEntry>, CoreError>> + Send;

    /// Candidate pool for auto-generated meal plans.
    fn public_recipe_ids(&self) -> impl Future<Output = Result<Vec<Uuid>, CoreError>> + Send;
}
