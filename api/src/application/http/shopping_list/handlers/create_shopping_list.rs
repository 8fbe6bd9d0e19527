use axum::{Json, extract::State};
use larder_core::domain::{
    ingredient::ports::IngredientRepository,
    shopping_list::{
        entities::{
            ShoppingList, ShoppingListConfig, ShoppingListItem, ShoppingListItemConfig,
        },
        ports::ShoppingListRepository,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::{CurrentUser, require_active_user},
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        shopping_list::validators::CreateShoppingListRequest,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "shopping_list",
    summary = "Create a shopping list",
    request_body = CreateShoppingListRequest,
    responses(
        (status = 201, body = ShoppingList),
        (status = 400, description = "Invalid payload or unknown ingredient"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_shopping_list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateShoppingListRequest>,
) -> Result<Response<ShoppingList>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let user = require_active_user(&state, user_id).await?;

    let ids: Vec<Uuid> = request.items.iter().map(|i| i.ingredient_id).collect();
    let found = state
        .ingredient_repository
        .get_many(ids.clone())
        .await
        .map_err(ApiError::from)?;
    for id in ids {
        if !found.iter().any(|i| i.id == id) {
            return Err(ApiError::BadRequest(format!("Unknown ingredient: {id}")));
        }
    }

    let list = ShoppingList::new(ShoppingListConfig {
        user_id: user.id,
        name: request.name,
        description: request.description,
        source_type: "manual".to_string(),
        source_id: None,
    });

    let items = request
        .items
        .into_iter()
        .map(|input| {
            ShoppingListItem::new(ShoppingListItemConfig {
                shopping_list_id: list.id,
                ingredient_id: input.ingredient_id,
                quantity: input.quantity,
                unit: input.unit,
                estimated_price: input.estimated_price,
                notes: input.notes,
            })
        })
        .collect();

    let created = state
        .shopping_list_repository
        .create_list(list, items)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
