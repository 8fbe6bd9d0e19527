use axum::extract::{Path, State};
use larder_core::domain::recipe::{
    entities::{Recipe, RecipeStep},
    ports::RecipeRepository,
    value_objects::RecipeIngredientDetail,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::CurrentUser,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientLine {
    pub ingredient_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub notes: Option<String>,
    pub order_index: i32,
}

impl From<RecipeIngredientDetail> for RecipeIngredientLine {
    fn from(detail: RecipeIngredientDetail) -> Self {
        Self {
            ingredient_id: detail.ingredient.id,
            name: detail.ingredient.name,
            quantity: detail.link.quantity,
            unit: detail.link.unit,
            notes: detail.link.notes,
            order_index: detail.link.order_index,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeDetailResponse {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub ingredients: Vec<RecipeIngredientLine>,
    pub steps: Vec<RecipeStep>,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get one recipe with ingredients and steps",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = RecipeDetailResponse),
        (status = 403, description = "Recipe is private"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    viewer: Option<CurrentUser>,
) -> Result<Response<RecipeDetailResponse>, ApiError> {
    let recipe = state
        .recipe_repository
        .get_by_id(recipe_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    if !recipe.is_public {
        match viewer {
            // Anonymous callers cannot tell a private recipe from an absent one.
            None => return Err(ApiError::NotFound("Recipe not found".to_string())),
            Some(CurrentUser(user_id)) if user_id != recipe.author_id => {
                return Err(ApiError::Forbidden("Recipe is private".to_string()));
            }
            Some(_) => {}
        }
    }

    state
        .recipe_repository
        .increment_view_count(recipe_id)
        .await
        .map_err(ApiError::from)?;

    let ingredients = state
        .recipe_repository
        .ingredients_with_details(recipe_id)
        .await
        .map_err(ApiError::from)?
        .into_iter()
        .map(RecipeIngredientLine::from)
        .collect();

    let steps = state
        .recipe_repository
        .steps(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeDetailResponse {
        recipe,
        ingredients,
        steps,
    }))
}
