use axum::{Json, extract::State};
use larder_core::domain::{
    ingredient::ports::IngredientRepository,
    recipe::{
        entities::{Recipe, RecipeConfig, RecipeIngredient, RecipeStep},
        ports::RecipeRepository,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::{
        recipe::validators::{CreateRecipeRequest, RecipeIngredientInput, RecipeStepInput},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

/// Every referenced ingredient must exist and be active.
pub async fn check_ingredients_exist(
    state: &AppState,
    inputs: &[RecipeIngredientInput],
) -> Result<(), ApiError> {
    let ids: Vec<Uuid> = inputs.iter().map(|i| i.ingredient_id).collect();
    let found = state
        .ingredient_repository
        .get_many(ids.clone())
        .await
        .map_err(ApiError::from)?;

    for id in ids {
        match found.iter().find(|i| i.id == id) {
            Some(ingredient) if ingredient.is_active => {}
            _ => {
                return Err(ApiError::BadRequest(format!("Unknown ingredient: {id}")));
            }
        }
    }

    Ok(())
}

pub fn build_ingredients(recipe_id: Uuid, inputs: Vec<RecipeIngredientInput>) -> Vec<RecipeIngredient> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            RecipeIngredient::new(
                recipe_id,
                input.ingredient_id,
                input.quantity,
                input.unit,
                input.notes,
                index as i32,
            )
        })
        .collect()
}

pub fn build_steps(recipe_id: Uuid, inputs: Vec<RecipeStepInput>) -> Vec<RecipeStep> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            RecipeStep::new(
                recipe_id,
                index as i32 + 1,
                input.instruction,
                input.image,
                input.duration_minutes,
            )
        })
        .collect()
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create a recipe",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, body = Recipe),
        (status = 400, description = "Invalid payload or unknown ingredient"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<Response<Recipe>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let user = require_active_user(&state, user_id).await?;

    check_ingredients_exist(&state, &request.ingredients).await?;

    let recipe = Recipe::new(RecipeConfig {
        author_id: user.id,
        title: request.title,
        description: request.description,
        category: request.category,
        cuisine: request.cuisine,
        difficulty: request.difficulty,
        prep_time_minutes: request.prep_time_minutes,
        cook_time_minutes: request.cook_time_minutes,
        servings: request.servings,
        images: request.images,
        is_public: request.is_public,
    });

    let ingredients = build_ingredients(recipe.id, request.ingredients);
    let steps = build_steps(recipe.id, request.steps);

    let created = state
        .recipe_repository
        .create_recipe(recipe, ingredients, steps)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_ingredients_keep_input_order() {
        let recipe_id = Uuid::new_v4();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let rows = build_ingredients(
            recipe_id,
            vec![
                RecipeIngredientInput {
                    ingredient_id: first,
                    quantity: 150.0,
                    unit: "g".to_string(),
                    notes: None,
                },
                RecipeIngredientInput {
                    ingredient_id: second,
                    quantity: 2.5,
                    unit: "tbsp".to_string(),
                    notes: Some("to taste".to_string()),
                },
            ],
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ingredient_id, first);
        assert_eq!(rows[0].order_index, 0);
        assert_eq!(rows[0].quantity, 150.0);
        assert_eq!(rows[1].ingredient_id, second);
        assert_eq!(rows[1].order_index, 1);
        assert_eq!(rows[1].notes.as_deref(), Some("to taste"));
    }

    #[test]
    fn built_steps_are_numbered_from_one() {
        let rows = build_steps(
            Uuid::new_v4(),
            vec![
                RecipeStepInput {
                    instruction: "Whisk the eggs".to_string(),
                    image: None,
                    duration_minutes: Some(2),
                },
                RecipeStepInput {
                    instruction: "Fry gently".to_string(),
                    image: None,
                    duration_minutes: Some(5),
                },
            ],
        );

        assert_eq!(rows[0].step_number, 1);
        assert_eq!(rows[1].step_number, 2);
    }
}
