use uuid::Uuid;

use crate::domain::recipe::entities::RecipeRating;

/// Mean of the given scores rounded to two decimals, 0 when empty.
pub fn average_rating(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: i32 = scores.iter().sum();
    let mean = f64::from(sum) / scores.len() as f64;
    (mean * 100.0).round() / 100.0
}

/// One rating per (recipe, user): a second rating revises the first instead
/// of adding a row.
pub fn upsert_rating(
    existing: Option<RecipeRating>,
    recipe_id: Uuid,
    user_id: Uuid,
    score: i32,
    comment: Option<String>,
) -> RecipeRating {
    match existing {
        Some(mut rating) => {
            rating.revise(score, comment);
            rating
        }
        None => RecipeRating::new(recipe_id, user_id, score, comment),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{PageQuery, Paged},
        },
        recipe::{
            entities::{Recipe, RecipeConfig, RecipeFavorite, RecipeIngredient, RecipeStep},
            ports::RecipeRepository,
            value_objects::{FavoriteEntry, GetRecipesFilter, RecipeIngredientDetail},
        },
    };

    #[test]
    fn empty_scores_average_to_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        assert_eq!(average_rating(&[5, 4]), 4.5);
        assert_eq!(average_rating(&[5, 4, 4]), 4.33);
        assert_eq!(average_rating(&[2, 3, 3]), 2.67);
    }

    #[test]
    fn single_score_is_its_own_average() {
        assert_eq!(average_rating(&[3]), 3.0);
    }

    #[test]
    fn first_rating_inserts_a_new_row() {
        let recipe_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let rating = upsert_rating(None, recipe_id, user_id, 4, Some("Solid".to_string()));

        assert_eq!(rating.recipe_id, recipe_id);
        assert_eq!(rating.user_id, user_id);
        assert_eq!(rating.score, 4);
    }

    #[test]
    fn second_rating_revises_the_existing_row() {
        let recipe_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let first = upsert_rating(None, recipe_id, user_id, 2, Some("Bland".to_string()));

        let second = upsert_rating(Some(first.clone()), recipe_id, user_id, 5, None);

        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.score, 5);
        // An absent comment keeps the previous one.
        assert_eq!(second.comment.as_deref(), Some("Bland"));
    }

    /// Ingredient storage only; everything else is not under test here.
    #[derive(Default)]
    struct InMemoryIngredients {
        ingredients: Mutex<Vec<RecipeIngredient>>,
    }

    impl RecipeRepository for InMemoryIngredients {
        async fn fetch_recipes(
            &self,
            _filter: GetRecipesFilter,
        ) -> Result<Paged<Recipe>, CoreError> {
            unimplemented!()
        }

        async fn get_by_id(&self, _recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
            unimplemented!()
        }

        async fn create_recipe(
            &self,
            recipe: Recipe,
            ingredients: Vec<RecipeIngredient>,
            _steps: Vec<RecipeStep>,
        ) -> Result<Recipe, CoreError> {
            *self.ingredients.lock().unwrap() = ingredients;
            Ok(recipe)
        }

        async fn update_recipe(
            &self,
            recipe: Recipe,
            ingredients: Option<Vec<RecipeIngredient>>,
            _steps: Option<Vec<RecipeStep>>,
        ) -> Result<Recipe, CoreError> {
            if let Some(replacement) = ingredients {
                *self.ingredients.lock().unwrap() = replacement;
            }
            Ok(recipe)
        }

        async fn delete_recipe(&self, _recipe_id: Uuid) -> Result<(), CoreError> {
            unimplemented!()
        }

        async fn increment_view_count(&self, _recipe_id: Uuid) -> Result<(), CoreError> {
            unimplemented!()
        }

        async fn ingredients_with_details(
            &self,
            _recipe_id: Uuid,
        ) -> Result<Vec<RecipeIngredientDetail>, CoreError> {
            unimplemented!()
        }

        async fn steps(&self, _recipe_id: Uuid) -> Result<Vec<RecipeStep>, CoreError> {
            unimplemented!()
        }

        async fn get_rating(
            &self,
            _recipe_id: Uuid,
            _user_id: Uuid,
        ) -> Result<Option<RecipeRating>, CoreError> {
            unimplemented!()
        }

        async fn save_rating(&self, _rating: RecipeRating) -> Result<RecipeRating, CoreError> {
            unimplemented!()
        }

        async fn rating_scores(&self, _recipe_id: Uuid) -> Result<Vec<i32>, CoreError> {
            unimplemented!()
        }

        async fn set_rating_summary(
            &self,
            _recipe_id: Uuid,
            _rating: f64,
            _rating_count: i32,
        ) -> Result<(), CoreError> {
            unimplemented!()
        }

        async fn get_favorite(
            &self,
            _recipe_id: Uuid,
            _user_id: Uuid,
        ) -> Result<Option<RecipeFavorite>, CoreError> {
            unimplemented!()
        }

        async fn insert_favorite(
            &self,
            _favorite: RecipeFavorite,
        ) -> Result<RecipeFavorite, CoreError> {
            unimplemented!()
        }

        async fn delete_favorite(&self, _favorite_id: Uuid) -> Result<(), CoreError> {
            unimplemented!()
        }

        async fn set_favorite_count(
            &self,
            _recipe_id: Uuid,
            _favorite_count: i32,
        ) -> Result<(), CoreError> {
            unimplemented!()
        }

        async fn fetch_by_author(
            &self,
            _author_id: Uuid,
            _page: PageQuery,
        ) -> Result<Paged<Recipe>, CoreError> {
            unimplemented!()
        }

        async fn fetch_favorites(
            &self,
            _user_id: Uuid,
            _page: PageQuery,
        ) -> Result<Paged<FavoriteEntry>, CoreError> {
            unimplemented!()
        }

        async fn public_recipe_ids(&self) -> Result<Vec<Uuid>, CoreError> {
            unimplemented!()
        }
    }

    fn sample_recipe() -> Recipe {
        Recipe::new(RecipeConfig {
            author_id: Uuid::new_v4(),
            title: "Fried rice".to_string(),
            description: None,
            category: None,
            cuisine: None,
            difficulty: None,
            prep_time_minutes: None,
            cook_time_minutes: Some(15),
            servings: 2,
            images: Vec::new(),
            is_public: true,
        })
    }

    fn line(recipe_id: Uuid, quantity: f64, order_index: i32) -> RecipeIngredient {
        RecipeIngredient::new(
            recipe_id,
            Uuid::new_v4(),
            quantity,
            "g".to_string(),
            None,
            order_index,
        )
    }

    #[tokio::test]
    async fn ingredient_replacement_round_trips_the_last_write() {
        let repo = InMemoryIngredients::default();
        let recipe = sample_recipe();

        let original = vec![line(recipe.id, 200.0, 0), line(recipe.id, 50.0, 1)];
        repo.create_recipe(recipe.clone(), original, Vec::new())
            .await
            .unwrap();

        let replacement = vec![
            line(recipe.id, 120.0, 0),
            line(recipe.id, 80.0, 1),
            line(recipe.id, 5.0, 2),
        ];
        repo.update_recipe(recipe.clone(), Some(replacement.clone()), None)
            .await
            .unwrap();

        assert_eq!(*repo.ingredients.lock().unwrap(), replacement);
    }

    #[tokio::test]
    async fn omitted_ingredient_list_keeps_the_previous_write() {
        let repo = InMemoryIngredients::default();
        let recipe = sample_recipe();

        let original = vec![line(recipe.id, 200.0, 0)];
        repo.create_recipe(recipe.clone(), original.clone(), Vec::new())
            .await
            .unwrap();
        repo.update_recipe(recipe, None, None).await.unwrap();

        assert_eq!(*repo.ingredients.lock().unwrap(), original);
    }
}
