use axum::extract::State;
use chrono::Utc;
use larder_core::domain::nutrition::{entities::WeeklyNutrition, services::weekly_nutrition};

use crate::application::{
    auth::CurrentUser,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/weekly",
    tag = "nutrition",
    summary = "Intake of the trailing 7 days with averages",
    responses(
        (status = 200, body = WeeklyNutrition),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_weekly_nutrition(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<WeeklyNutrition>, ApiError> {
    let today = Utc::now().date_naive();

    let weekly = weekly_nutrition(&*state.nutrition_repository, user_id, today)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(weekly))
}
