use axum::extract::{Path, State};
use chrono::NaiveDate;
use larder_core::domain::nutrition::{entities::DailyNutrition, services::daily_nutrition};

use crate::application::{
    auth::CurrentUser,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/daily/{date}",
    tag = "nutrition",
    summary = "Intake of one day, completed meals only",
    params(
        ("date" = String, Path, description = "Date as YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = DailyNutrition),
        (status = 400, description = "Invalid date format"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_daily_nutrition(
    Path(date): Path<String>,
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response<DailyNutrition>, ApiError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest("Invalid date format, expected YYYY-MM-DD".to_string()))?;

    let daily = daily_nutrition(&*state.nutrition_repository, user_id, date)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(daily))
}
