use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

use super::handlers::{
    change_password::{__path_change_password, change_password},
    get_profile::{__path_get_profile, get_profile},
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_profile, update_profile, change_password))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/users/profile"),
            get(get_profile).put(update_profile),
        )
        .route(
            &format!("{root_path}/users/password"),
            put(change_password),
        )
}
