use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::{
    domain::recipe::entities::{Recipe, RecipeFavorite, RecipeIngredient, RecipeRating, RecipeStep},
    entity::{recipe_favorites, recipe_ingredients, recipe_ratings, recipe_steps, recipes},
};

fn parse_images(value: &serde_json::Value) -> Vec<String> {
    match serde_json::from_value(value.clone()) {
        Ok(images) => images,
        Err(e) => {
            warn!("Ignoring malformed images blob: {}", e);
            Vec::new()
        }
    }
}

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            title: model.title.clone(),
            description: model.description.clone(),
            category: model.category.clone(),
            cuisine: model.cuisine.clone(),
            difficulty: model.difficulty.clone(),
            prep_time_minutes: model.prep_time_minutes,
            cook_time_minutes: model.cook_time_minutes,
            servings: model.servings,
            images: parse_images(&model.images),
            rating: model.rating,
            rating_count: model.rating_count,
            favorite_count: model.favorite_count,
            view_count: model.view_count,
            is_public: model.is_public,
            is_featured: model.is_featured,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

pub fn recipe_to_active_model(recipe: &Recipe) -> recipes::ActiveModel {
    recipes::ActiveModel {
        id: Set(recipe.id),
        author_id: Set(recipe.author_id),
        title: Set(recipe.title.clone()),
        description: Set(recipe.description.clone()),
        category: Set(recipe.category.clone()),
        cuisine: Set(recipe.cuisine.clone()),
        difficulty: Set(recipe.difficulty.clone()),
        prep_time_minutes: Set(recipe.prep_time_minutes),
        cook_time_minutes: Set(recipe.cook_time_minutes),
        servings: Set(recipe.servings),
        images: Set(serde_json::json!(recipe.images)),
        rating: Set(recipe.rating),
        rating_count: Set(recipe.rating_count),
        favorite_count: Set(recipe.favorite_count),
        view_count: Set(recipe.view_count),
        is_public: Set(recipe.is_public),
        is_featured: Set(recipe.is_featured),
        created_at: Set(recipe.created_at.fixed_offset()),
        updated_at: Set(recipe.updated_at.fixed_offset()),
    }
}

impl From<&recipe_ingredients::Model> for RecipeIngredient {
    fn from(model: &recipe_ingredients::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            ingredient_id: model.ingredient_id,
            quantity: model.quantity,
            unit: model.unit.clone(),
            notes: model.notes.clone(),
            order_index: model.order_index,
        }
    }
}

pub fn recipe_ingredient_to_active_model(
    link: &RecipeIngredient,
) -> recipe_ingredients::ActiveModel {
    recipe_ingredients::ActiveModel {
        id: Set(link.id),
        recipe_id: Set(link.recipe_id),
        ingredient_id: Set(link.ingredient_id),
        quantity: Set(link.quantity),
        unit: Set(link.unit.clone()),
        notes: Set(link.notes.clone()),
        order_index: Set(link.order_index),
    }
}

impl From<&recipe_steps::Model> for RecipeStep {
    fn from(model: &recipe_steps::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            step_number: model.step_number,
            instruction: model.instruction.clone(),
            image: model.image.clone(),
            duration_minutes: model.duration_minutes,
        }
    }
}

pub fn recipe_step_to_active_model(step: &RecipeStep) -> recipe_steps::ActiveModel {
    recipe_steps::ActiveModel {
        id: Set(step.id),
        recipe_id: Set(step.recipe_id),
        step_number: Set(step.step_number),
        instruction: Set(step.instruction.clone()),
        image: Set(step.image.clone()),
        duration_minutes: Set(step.duration_minutes),
    }
}

impl From<&recipe_ratings::Model> for RecipeRating {
    fn from(model: &recipe_ratings::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            user_id: model.user_id,
            score: model.score,
            comment: model.comment.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

pub fn rating_to_active_model(rating: &RecipeRating) -> recipe_ratings::ActiveModel {
    recipe_ratings::ActiveModel {
        id: Set(rating.id),
        recipe_id: Set(rating.recipe_id),
        user_id: Set(rating.user_id),
        score: Set(rating.score),
        comment: Set(rating.comment.clone()),
        created_at: Set(rating.created_at.fixed_offset()),
        updated_at: Set(rating.updated_at.fixed_offset()),
    }
}

impl From<&recipe_favorites::Model> for RecipeFavorite {
    fn from(model: &recipe_favorites::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            user_id: model.user_id,
            created_at: model.created_at.to_utc(),
        }
    }
}

pub fn favorite_to_active_model(favorite: &RecipeFavorite) -> recipe_favorites::ActiveModel {
    recipe_favorites::ActiveModel {
        id: Set(favorite.id),
        recipe_id: Set(favorite.recipe_id),
        user_id: Set(favorite.user_id),
        created_at: Set(favorite.created_at.fixed_offset()),
    }
}
