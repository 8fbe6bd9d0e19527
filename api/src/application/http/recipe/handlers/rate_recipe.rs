use axum::{
    Json,
    extract::{Path, State},
};
use larder_core::domain::recipe::{
    entities::RecipeRating,
    ports::RecipeRepository,
    services::{average_rating, upsert_rating},
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::CurrentUser,
    http::{
        recipe::validators::RateRecipeRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RateRecipeResponse {
    pub rating: RecipeRating,
    pub recipe_rating: f64,
    pub recipe_rating_count: i32,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/rate",
    tag = "recipe",
    summary = "Rate a recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    request_body = RateRecipeRequest,
    responses(
        (status = 200, body = RateRecipeResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn rate_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<RateRecipeRequest>,
) -> Result<Response<RateRecipeResponse>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    state
        .recipe_repository
        .get_by_id(recipe_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    let existing = state
        .recipe_repository
        .get_rating(recipe_id, user_id)
        .await
        .map_err(ApiError::from)?;

    // The repository upsert on (recipe_id, user_id) backs this decision
    // against a concurrent first rating.
    let rating = upsert_rating(existing, recipe_id, user_id, request.score, request.comment);

    let rating = state
        .recipe_repository
        .save_rating(rating)
        .await
        .map_err(ApiError::from)?;

    let scores = state
        .recipe_repository
        .rating_scores(recipe_id)
        .await
        .map_err(ApiError::from)?;

    let average = average_rating(&scores);
    let count = scores.len() as i32;

    state
        .recipe_repository
        .set_rating_summary(recipe_id, average, count)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RateRecipeResponse {
        rating,
        recipe_rating: average,
        recipe_rating_count: count,
    }))
}
