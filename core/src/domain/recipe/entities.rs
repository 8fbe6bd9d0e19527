use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: i32,
    pub images: Vec<String>,
    /// Average of all ratings, rounded to two decimals.
    pub rating: f64,
    pub rating_count: i32,
    pub favorite_count: i32,
    pub view_count: i32,
    pub is_public: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: i32,
    pub images: Vec<String>,
    pub is_public: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub images: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            author_id: config.author_id,
            title: config.title,
            description: config.description,
            category: config.category,
            cuisine: config.cuisine,
            difficulty: config.difficulty,
            prep_time_minutes: config.prep_time_minutes,
            cook_time_minutes: config.cook_time_minutes,
            servings: config.servings,
            images: config.images,
            rating: 0.0,
            rating_count: 0,
            favorite_count: 0,
            view_count: 0,
            is_public: config.is_public,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: RecipeUpdate) {
        let (now, _) = generate_timestamp();

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(cuisine) = update.cuisine {
            self.cuisine = Some(cuisine);
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = Some(difficulty);
        }
        if let Some(prep) = update.prep_time_minutes {
            self.prep_time_minutes = Some(prep);
        }
        if let Some(cook) = update.cook_time_minutes {
            self.cook_time_minutes = Some(cook);
        }
        if let Some(servings) = update.servings {
            self.servings = servings;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(is_public) = update.is_public {
            self.is_public = is_public;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub notes: Option<String>,
    pub order_index: i32,
}

impl RecipeIngredient {
    pub fn new(
        recipe_id: Uuid,
        ingredient_id: Uuid,
        quantity: f64,
        unit: String,
        notes: Option<String>,
        order_index: i32,
    ) -> Self {
        let (_, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            ingredient_id,
            quantity,
            unit,
            notes,
            order_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeStep {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub step_number: i32,
    pub instruction: String,
    pub image: Option<String>,
    pub duration_minutes: Option<i32>,
}

impl RecipeStep {
    pub fn new(
        recipe_id: Uuid,
        step_number: i32,
        instruction: String,
        image: Option<String>,
        duration_minutes: Option<i32>,
    ) -> Self {
        let (_, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            step_number,
            instruction,
            image,
            duration_minutes,
        }
    }
}

/// One user's rating of a recipe, unique per (user, recipe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRating {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    /// 1 through 5.
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeRating {
    pub fn new(recipe_id: Uuid, user_id: Uuid, score: i32, comment: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            user_id,
            score,
            comment,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn revise(&mut self, score: i32, comment: Option<String>) {
        let (now, _) = generate_timestamp();
        self.score = score;
        if comment.is_some() {
            self.comment = comment;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeFavorite {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl RecipeFavorite {
    pub fn new(recipe_id: Uuid, user_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            user_id,
            created_at: now,
        }
    }
}
