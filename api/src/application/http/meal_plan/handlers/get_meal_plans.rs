use axum::extract::{Query, State};
use larder_core::domain::{
    common::value_objects::PageQuery,
    meal_plan::{
        entities::MealPlan, ports::MealPlanRepository, value_objects::GetMealPlansFilter,
    },
};

use crate::application::{
    auth::CurrentUser,
    http::{
        meal_plan::validators::ListMealPlansParams,
        pagination::Paginated,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "meal_plan",
    summary = "List the current user's meal plans",
    params(ListMealPlansParams),
    responses(
        (status = 200, description = "Paginated meal plans, most recent first"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_meal_plans(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(params): Query<ListMealPlansParams>,
) -> Result<Response<Paginated<MealPlan>>, ApiError> {
    let page = PageQuery::new(params.page, params.per_page);

    let filter = GetMealPlansFilter {
        status: params.status,
        page,
    };

    let paged = state
        .meal_plan_repository
        .fetch_plans(user_id, filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Paginated::from_paged(paged, &page, |p| p)))
}
